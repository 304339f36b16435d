use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::Record;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        if state.table.is_loading() {
            ui.colored_label(colors::TEXT_MUTED, "loading...");
            return;
        }

        render_sender_filter(ui, state);
        ui.add_space(8.0);

        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("records_grid")
                .num_columns(5)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for header in ["Message", "Sender", "Client Timestamp", "Server Timestamp", "Delay"] {
                        ui.colored_label(colors::TEXT_MUTED, egui::RichText::new(header).strong());
                    }
                    ui.end_row();

                    for record in state.table.visible_records() {
                        render_row(ui, record);
                    }
                });
        });

        if state.table.records().is_empty() {
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_MUTED, "No data");
        }
    });
}

fn render_row(ui: &mut egui::Ui, record: &Record) {
    ui.label(&record.message);
    ui.label(&record.sender);
    ui.monospace(record.timestamp_client.format(TIMESTAMP_FORMAT).to_string());
    ui.monospace(record.timestamp_server.format(TIMESTAMP_FORMAT).to_string());
    ui.label(format!("{} ms", record.sleep_ms));
    ui.end_row();
}

fn render_sender_filter(ui: &mut egui::Ui, state: &mut AppState) {
    let mut selected = state.table.sender_filter().map(str::to_string);
    let senders: Vec<String> = state.table.senders().into_iter().map(str::to_string).collect();

    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_MUTED, "Sender");
        egui::ComboBox::from_id_salt("sender_filter")
            .selected_text(selected.as_deref().unwrap_or("All"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, "All");
                for sender in senders {
                    let label = sender.clone();
                    ui.selectable_value(&mut selected, Some(sender), label);
                }
            });
    });

    if selected.as_deref() != state.table.sender_filter() {
        state.table.set_sender_filter(selected);
    }
}
