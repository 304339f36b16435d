//! Color Constants
//!
//! Dark slate palette for the dashboard.

use eframe::egui::Color32;

/// Window background
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x22, 0x2A);

/// Cards, table and form panels
pub const PANEL_BG: Color32 = Color32::from_rgb(0x27, 0x2C, 0x36);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x16, 0x19, 0x1F);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x31, 0x37, 0x43);

/// Borders and grid lines
pub const BORDER: Color32 = Color32::from_rgb(0x3B, 0x42, 0x50);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE6, 0xE9, 0xEF);

/// Muted text: headers, timestamps, placeholders
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9A, 0xA3, 0xB2);

/// Buttons and highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x3D, 0x7E, 0xD8);

/// Hovered widgets
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x52, 0x92, 0xEA);

/// Info banners (queue progress, last send)
pub const INFO_BG: Color32 = Color32::from_rgb(0x1F, 0x33, 0x4F);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
