// LogLens - ui/panels/detail.rs
//
// Row detail pane showing full message, metadata, and tag classes.

use crate::app::state::AppState;

/// Render the detail pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if let Some(entry) = state.selected_entry() {
        egui::Grid::new("detail_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                if let Some(ref level) = entry.level {
                    ui.label("Level:");
                    ui.label(level);
                    ui.end_row();
                }

                if let Some(ref source) = entry.source {
                    ui.label("Source:");
                    ui.label(source);
                    ui.end_row();
                }

                ui.label("Line:");
                ui.label(entry.line_number.to_string());
                ui.end_row();

                if let Some(ref ts) = entry.timestamp {
                    ui.label("Timestamp:");
                    ui.label(ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string());
                    ui.end_row();
                }

                ui.label("Classes:");
                ui.label(
                    entry
                        .classes
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(" "),
                );
                ui.end_row();
            });

        ui.separator();
        ui.label("Message:");
        egui::ScrollArea::vertical()
            .max_height(100.0)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(&entry.message).monospace());
            });
    } else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a row to view details.");
        });
    }
}
