use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::DetailState;
use crate::egui_app::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("← Back to list").clicked() {
        state.navigate(AppView::List);
        return;
    }
    ui.add_space(8.0);

    let (id, read_only, listed) = match &state.detail {
        Some(DetailState::Ready { record, listed }) => {
            (record.id.clone(), record.is_read_only(), *listed)
        }
        Some(DetailState::Loading(id)) => {
            let id = id.clone();
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    egui::RichText::new(format!("Loading user {}...", id))
                        .color(colors::TEXT_SECONDARY),
                );
            });
            return;
        }
        None => return,
    };

    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(format!("User {}", id)).strong());
            if read_only {
                styles::badge(ui, "read-only");
            }
        });
        if let Some(DetailState::Ready { record, .. }) = &state.detail {
            if let Some(username) = record.username() {
                ui.label(
                    egui::RichText::new(format!("@{}", username)).color(colors::TEXT_SECONDARY),
                );
            }
        }
        ui.add_space(12.0);

        let editable = state.detail.as_ref().is_some_and(DetailState::is_editable);
        super::form::render_fields(ui, &mut state.edit_form, editable);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let update = ui.add_enabled(editable, styles::primary_button("Update"));
            let update = if read_only {
                update.on_disabled_hover_text("Users from the demo API cannot be edited")
            } else if !listed {
                update.on_disabled_hover_text("Reload the list to edit this user")
            } else {
                update
            };
            if update.clicked() {
                state.submit_update();
            }
            if listed && ui.button("Delete").clicked() {
                state.request_delete(id.clone());
            }
        });

        if !listed {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("This user is not part of the loaded list.")
                    .color(colors::TEXT_SECONDARY)
                    .size(12.0),
            );
        }
    });
}
