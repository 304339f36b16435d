use eframe::egui;

use crate::egui_app::form::{MAX_SLEEP_MS, SLEEP_STEP_MS};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_max_width(600.0);

        ui.colored_label(colors::TEXT_MUTED, "Sender Name");
        let sender = ui.add(
            egui::TextEdit::singleline(&mut state.form.sender)
                .hint_text("Input sender name")
                .desired_width(f32::INFINITY),
        );
        if sender.changed() {
            state.save_sender();
        }
        ui.add_space(8.0);

        let mut remove = None;
        egui::Grid::new("form_rows")
            .num_columns(3)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                if !state.form.rows.is_empty() {
                    ui.colored_label(colors::TEXT_MUTED, "Message");
                    ui.colored_label(colors::TEXT_MUTED, "API Delay");
                    ui.end_row();
                }

                for (index, row) in state.form.rows.iter_mut().enumerate() {
                    ui.add(egui::TextEdit::singleline(&mut row.message).hint_text("Message"));
                    ui.add(
                        egui::DragValue::new(&mut row.sleep_ms)
                            .speed(SLEEP_STEP_MS as f64)
                            .range(0..=MAX_SLEEP_MS)
                            .suffix(" ms"),
                    );
                    if ui.button("➖").on_hover_text("Remove").clicked() {
                        remove = Some(index);
                    }
                    ui.end_row();
                }
            });

        if let Some(index) = remove {
            state.form.remove_row(index);
        }

        ui.add_space(6.0);
        if ui
            .add_sized([ui.available_width(), 24.0], egui::Button::new("➕ Add field"))
            .clicked()
        {
            state.form.add_row();
        }

        if let Some(error) = &state.form_error {
            ui.colored_label(colors::ERROR, error);
        }

        ui.add_space(6.0);
        let send = egui::Button::new(egui::RichText::new("Send").strong()).fill(colors::ACCENT);
        if ui.add_sized([ui.available_width(), 28.0], send).clicked() {
            state.submit_form();
        }
    });
}
