//! Color Constants
//!
//! Warm brown/tan palette used by every view.

use eframe::egui::Color32;

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Main panel background - Off-white
pub const PANEL_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Card/form background - Light tan
pub const CARD_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Table row hover - Lighter tan
pub const ROW_HOVER: Color32 = Color32::from_rgb(0xD8, 0xC0, 0xA8);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent color for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x6D, 0x4B, 0x3D);

/// Read-only badge - Gray
pub const READ_ONLY_BADGE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xD0, 0xC0, 0xB0);
