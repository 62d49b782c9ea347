use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::store::LoadState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub mod add_user_view;
pub mod detail_view;
pub mod form;
pub mod list_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("👥 User Desk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    match state.store.load_state() {
                        LoadState::Loading => {
                            ui.spinner();
                            ui.colored_label(colors::WARNING, "Loading");
                        }
                        LoadState::Partial { .. } => {
                            ui.colored_label(colors::WARNING, "🟠 Partially loaded");
                        }
                        LoadState::Unavailable => {
                            ui.colored_label(colors::ERROR, "🔴 Backends unreachable");
                        }
                        LoadState::Complete => {
                            ui.colored_label(colors::SUCCESS, "🟢 Connected");
                        }
                        LoadState::NotStarted => {}
                    }

                    ui.add_space(16.0);
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        format!("{} users", state.store.users().len()),
                    );
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_panel_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::List => list_view::render(ui, state),
            AppView::Detail(_) => detail_view::render(ui, state),
            AppView::AddUser => add_user_view::render(ui, state),
        });
}

/// Delete confirmation dialog
pub fn render_delete_confirm(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.pending_delete.clone() else {
        return;
    };
    let name = state
        .store
        .get(&id)
        .map(|user| user.name.clone())
        .unwrap_or_else(|| format!("user {}", id));

    egui::Window::new("Delete user")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete {}?", name));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add(styles::primary_button("Delete")).clicked() {
                    state.confirm_delete();
                }
                if ui.button("Cancel").clicked() {
                    state.cancel_delete();
                }
            });
        });
}

/// Notices, newest at the bottom, anchored bottom-right
pub fn render_toasts(ctx: &egui::Context, state: &mut AppState) {
    if state.toasts.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (index, notice) in state.toasts.iter().enumerate() {
                styles::toast_frame(notice).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_LIGHT, &notice.message);
                        if ui.small_button("✕").clicked() {
                            dismissed = Some(index);
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        state.dismiss_toast(index);
    }
}
