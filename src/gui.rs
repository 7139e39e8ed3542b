// LogLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the filter bar, row view, detail pane, and status bar.

use crate::app::state::AppState;
use crate::ui;

/// The LogLens application.
pub struct LogLensApp {
    pub state: AppState,
}

impl LogLensApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LogLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // F5 reloads the file.
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.state.load();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Log File\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Log files", &["log", "txt"])
                            .pick_file()
                        {
                            self.state.log_path = path;
                            self.state.load();
                        }
                        ui.close_menu();
                    }
                    if ui
                        .add(egui::Button::new("Reload").shortcut_text("F5"))
                        .clicked()
                    {
                        self.state.load();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Filter bar -- absent entirely when no controller is bound.
        if self.state.controller.is_some() {
            egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
                ui::panels::filter_bar::render(ui, &mut self.state);
            });
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty() {
                    ui.separator();
                    ui.label(format!(
                        "\u{26a0} {} config warning(s)",
                        self.state.warnings.len()
                    ))
                    .on_hover_ui(|ui| {
                        for warning in &self.state.warnings {
                            ui.label(warning);
                        }
                    });
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.entries.len();
                    if total > 0 {
                        ui.label(format!("{}/{} rows", self.state.visible_count(), total));
                    }
                });
            });
        });

        // Detail pane (bottom)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.state);
            });

        // Central panel (log rows)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::entries::render(ui, &mut self.state);
        });
    }
}
