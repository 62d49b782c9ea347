//! Labelled text fields shared by the add and detail views.

use eframe::egui;

use crate::egui_app::theme::colors;
use crate::egui_app::types::UserForm;

const LABEL_WIDTH: f32 = 80.0;
const INPUT_WIDTH: f32 = 280.0;

const FIELDS: [(&str, &str, &str); 3] = [
    ("name", "Name:", "Full name"),
    ("email", "Email:", "name@example.com"),
    ("phone", "Phone:", "10 digits"),
];

/// Name, email and phone inputs, each followed by its validation message.
///
/// Editing a field clears its error.
pub fn render_fields(ui: &mut egui::Ui, form: &mut UserForm, enabled: bool) {
    for (field, label, hint) in FIELDS {
        let error = form.error(field).map(str::to_owned);
        let buffer = match field {
            "name" => &mut form.name,
            "email" => &mut form.email,
            _ => &mut form.phone,
        };

        let changed = ui
            .horizontal(|ui| {
                ui.add_sized(
                    [LABEL_WIDTH, 24.0],
                    egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
                );
                ui.add_enabled(
                    enabled,
                    egui::TextEdit::singleline(buffer)
                        .hint_text(hint)
                        .desired_width(INPUT_WIDTH),
                )
                .changed()
            })
            .inner;

        if changed {
            form.clear_error(field);
        } else if let Some(message) = error {
            ui.horizontal(|ui| {
                ui.add_space(LABEL_WIDTH + 8.0);
                ui.label(egui::RichText::new(message).color(colors::ERROR).size(12.0));
            });
        }
        ui.add_space(6.0);
    }
}
