//! Color Constants
//!
//! A dark slate palette with a blue accent.

use eframe::egui::Color32;

/// Top bar background - Deep slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1E, 0x24, 0x2E);

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x25, 0x2C, 0x38);

/// Card background for form and list entries
pub const CARD_BG: Color32 = Color32::from_rgb(0x2E, 0x36, 0x44);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE6, 0xEA, 0xF0);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA5, 0xB5);

/// Accent color for primary buttons and the active nav link
pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Topic badge text
pub const TOPIC: Color32 = Color32::from_rgb(0x93, 0xC5, 0xFD);

/// Feedback message color
pub const MESSAGE: Color32 = Color32::from_rgb(0xFA, 0xCC, 0x15);

/// Destructive button background
pub const DANGER: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);
