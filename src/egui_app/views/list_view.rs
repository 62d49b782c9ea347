use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::store::LoadState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;
use crate::shared::user::UserId;

enum RowAction {
    View(UserId),
    Delete(UserId),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("User Management").color(colors::TEXT_PRIMARY).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styles::primary_button("Add New User")).clicked() {
                state.add_form.clear();
                state.navigate(AppView::AddUser);
            }
            if ui.button("⟳ Reload").clicked() {
                state.start_load();
            }
        });
    });
    ui.add_space(8.0);

    render_load_banner(ui, state);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Search:").color(colors::TEXT_SECONDARY));
        ui.add(
            egui::TextEdit::singleline(&mut state.search_query)
                .hint_text("Filter by name")
                .desired_width(280.0),
        );
        if !state.search_query.is_empty() && ui.small_button("✕").clicked() {
            state.search_query.clear();
        }
    });
    ui.add_space(8.0);

    if state.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading users...").color(colors::TEXT_SECONDARY));
        });
        return;
    }

    let mut action = None;
    styles::card_frame().show(ui, |ui| {
        let users = state.visible_users();
        if users.is_empty() {
            ui.label(egui::RichText::new("No users found").color(colors::TEXT_SECONDARY));
            return;
        }

        egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
            egui::Grid::new("users_table")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for header in ["Name", "Email", "Phone", "", "Actions"] {
                        ui.label(egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for user in users {
                        ui.label(&user.name);
                        ui.label(&user.email);
                        ui.label(&user.phone);
                        if user.is_read_only() {
                            styles::badge(ui, "read-only");
                        } else {
                            ui.label("");
                        }
                        ui.horizontal(|ui| {
                            if ui.button("View").clicked() {
                                action = Some(RowAction::View(user.id.clone()));
                            }
                            if ui.button("Delete").clicked() {
                                action = Some(RowAction::Delete(user.id.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
        });
    });

    match action {
        Some(RowAction::View(id)) => state.open_detail(id),
        Some(RowAction::Delete(id)) => state.request_delete(id),
        None => {}
    }
}

fn render_load_banner(ui: &mut egui::Ui, state: &AppState) {
    let message = match state.store.load_state() {
        LoadState::Partial { failed } => {
            let names: Vec<String> = failed.iter().map(ToString::to_string).collect();
            format!("Could not reach {}; showing the users that did load.", names.join(" and "))
        }
        LoadState::Unavailable => "Could not reach either backend. Try reloading.".to_string(),
        _ => return,
    };

    egui::Frame::new()
        .fill(colors::WARNING)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.colored_label(colors::TEXT_PRIMARY, format!("⚠ {}", message));
        });
    ui.add_space(8.0);
}
