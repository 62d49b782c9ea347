//! Theme Module
//!
//! Color scheme and styling for the user desk views:
//!
//! - Color constants for the brown/tan theme
//! - Frame builders for panels, cards and toasts
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_SECONDARY, "No users");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
