use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Queue progress banner and the last successfully sent body
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let pending = state.queue.len();
    if pending > 0 {
        styles::banner_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.spinner();
                let plural = if pending > 1 { "s" } else { "" };
                ui.colored_label(colors::TEXT_LIGHT, format!("Processing {} API call{}", pending, plural));
            });
            let current = state
                .queue
                .current()
                .map(|submission| submission.to_json())
                .unwrap_or_else(|| "null".to_string());
            ui.colored_label(colors::TEXT_MUTED, format!("Current body: {}", current));
        });
        ui.add_space(12.0);
    }

    if let Some(last_send) = &state.last_send {
        styles::banner_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.colored_label(colors::TEXT_LIGHT, "This is the last successfully sent body from this client");
            ui.colored_label(colors::TEXT_MUTED, last_send.to_json());
        });
        ui.add_space(12.0);
    }
}
