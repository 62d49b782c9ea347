use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("← Back to list").clicked() {
        state.navigate(AppView::List);
        return;
    }
    ui.add_space(8.0);

    styles::card_frame().show(ui, |ui| {
        ui.heading(egui::RichText::new("Add New User").color(colors::TEXT_PRIMARY).strong());
        ui.add_space(12.0);

        super::form::render_fields(ui, &mut state.add_form, true);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.add(styles::primary_button("Create")).clicked() {
                state.submit_new_user();
            }
            if ui.button("Clear").clicked() {
                state.add_form.clear();
            }
            if state.in_flight > 0 {
                ui.spinner();
            }
        });
    });
}
