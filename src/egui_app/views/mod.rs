use eframe::egui;

use crate::egui_app::realtime::FeedStatus;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod form_view;
pub mod status_view;
pub mod table_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("dataqueue").size(18.0).strong());
                ui.colored_label(colors::TEXT_MUTED, state.config.server_url());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clear = egui::Button::new("🗑 Clear all").fill(colors::PANEL_BG);
                    if ui.add_enabled(!state.cleanup_in_progress, clear).clicked() {
                        state.request_cleanup();
                    }

                    ui.add_space(16.0);
                    render_feed_status(ui, state.table.status());
                });
            });
        });
}

fn render_feed_status(ui: &mut egui::Ui, status: Option<&FeedStatus>) {
    match status {
        Some(FeedStatus::Connected) => {
            ui.colored_label(colors::SUCCESS, "🟢 Live");
        }
        Some(FeedStatus::Connecting) | None => {
            ui.colored_label(colors::WARNING, "🔄 Connecting");
        }
        Some(FeedStatus::Retrying) => {
            ui.colored_label(colors::WARNING, "🔄 Reconnecting");
        }
        Some(FeedStatus::Error(reason)) => {
            ui.colored_label(colors::ERROR, "🔴 Offline").on_hover_text(reason);
        }
        Some(FeedStatus::Closed) => {
            ui.colored_label(colors::TEXT_MUTED, "Closed");
        }
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            table_view::render(ui, state);
            ui.add_space(12.0);
            status_view::render(ui, state);
            form_view::render(ui, state);
        });
    });
}

pub fn render_toasts(ctx: &egui::Context, state: &mut AppState) {
    if state.toasts.is_empty() {
        return;
    }

    let mut dismissed = Vec::new();
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 56.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            for (id, notification) in state.toasts.iter() {
                styles::toast_frame(notification.kind).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(egui::Label::new(egui::RichText::new(&notification.text).color(colors::TEXT_LIGHT)).wrap());
                        if ui.small_button("✕").clicked() {
                            dismissed.push(id);
                        }
                    });
                });
                ui.add_space(6.0);
            }
        });

    for id in dismissed {
        state.toasts.dismiss(id);
    }
}
