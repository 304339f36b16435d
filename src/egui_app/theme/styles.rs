//! Theme Styling Functions

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::notifications::NotificationKind;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.window_fill = colors::PANEL_BG;
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BG;
    style.visuals.widgets.hovered.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.active.bg_fill = colors::ACCENT;

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for a content card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for info banners
pub fn banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INFO_BG)
        .stroke(Stroke::new(1.0, colors::ACCENT))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for a toast of the given kind
pub fn toast_frame(kind: NotificationKind) -> egui::Frame {
    let accent = match kind {
        NotificationKind::Success => colors::SUCCESS,
        NotificationKind::Error => colors::ERROR,
    };

    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(1.5, accent))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: egui::Color32::from_black_alpha(80),
        })
}
