//! Theme Styling Functions
//!
//! Helpers for applying the palette consistently across the views.

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;
use crate::egui_app::store::{Notice, NoticeLevel};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::PANEL_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    style.visuals.panel_fill = colors::PANEL_BG;
    style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors::SEPARATOR);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::ROW_HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::ROW_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.selection.bg_fill = colors::ACCENT_HOVER;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the main panel
pub fn main_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(16))
}

/// Card around forms and the user table
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Toast frame, colored by notice level
pub fn toast_frame(notice: &Notice) -> egui::Frame {
    let fill = match notice.level {
        NoticeLevel::Success => colors::SUCCESS,
        NoticeLevel::Error => colors::ERROR,
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Primary action button
pub fn primary_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).color(colors::TEXT_LIGHT)).fill(colors::ACCENT)
}

/// Small pill marking a read-only record
pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(colors::READ_ONLY_BADGE)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0).color(colors::TEXT_LIGHT));
        });
}
