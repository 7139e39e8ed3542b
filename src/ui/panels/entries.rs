// LogLens - ui/panels/entries.rs
//
// Virtual-scrolling log row view.
//
// Uses egui's `ScrollArea::show_rows` which renders only the rows currently
// in the viewport, giving O(1) rendering cost regardless of row count. Only
// rows whose `visible` flag is set are listed; hidden rows take no space.
//
// Text contrast: each row is a LayoutJob that colours only the level badge
// with the level-specific hue while the timestamp / source / message body
// uses `theme::row_text_colour`, so text stays readable in both themes.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the log rows (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let shown: Vec<usize> = state
        .entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.visible)
        .map(|(i, _)| i)
        .collect();

    if shown.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.entries.is_empty() {
                ui.label("No log rows loaded.\nOpen a log file via File \u{2192} Open Log File.");
            } else {
                ui.label("No rows match the current filter.");
            }
        });
        return;
    }

    let row_height = theme::ROW_HEIGHT;
    let body_colour = theme::row_text_colour(ui.visuals().dark_mode);
    let weak_colour = ui.style().visuals.weak_text_color();

    // Selection clicks are collected and applied after show_rows so we do
    // not mutable-borrow `state` while `entry` still holds an immutable
    // reference into `state.entries`.
    let mut clicked_id: Option<u64> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, row_height, shown.len(), |ui, row_range| {
            for display_idx in row_range {
                let Some(&entry_idx) = shown.get(display_idx) else {
                    continue;
                };
                let Some(entry) = state.entries.get(entry_idx) else {
                    continue;
                };

                let is_selected = state.selected_id == Some(entry.id);
                let badge = entry.level.as_deref().unwrap_or("-");
                let badge_colour = entry
                    .level
                    .as_ref()
                    .map(|l| theme::level_colour(&l.to_lowercase()))
                    .unwrap_or(weak_colour);

                let ts = entry
                    .timestamp
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "--:--:--".to_string());
                let source = entry.source.as_deref().unwrap_or("-");
                let first_line = entry.message.lines().next().unwrap_or(&entry.message);

                let font = egui::FontId::monospace(12.0);

                let mut row_job = LayoutJob::default();
                row_job.append(
                    &format!("[{badge:<8}] "),
                    0.0,
                    TextFormat {
                        font_id: font.clone(),
                        color: badge_colour,
                        ..Default::default()
                    },
                );
                row_job.append(
                    &format!("{} | {} | {}", ts, truncate_source(source, 18), first_line),
                    0.0,
                    TextFormat {
                        font_id: font,
                        color: body_colour,
                        ..Default::default()
                    },
                );

                let response = ui.selectable_label(is_selected, row_job);
                if response.clicked() {
                    clicked_id = Some(entry.id);
                }

                // Full raw line and position as tooltip on hover.
                response.on_hover_ui(|ui| {
                    ui.label(format!("Line {}", entry.line_number));
                    ui.label(egui::RichText::new(&entry.raw_text).monospace().small());
                });
            }
        });

    if let Some(id) = clicked_id {
        state.selected_id = Some(id);
    }
}

/// Return the last `max` characters of `s`, right-aligned.
fn truncate_source(s: &str, max: usize) -> String {
    // Truncate from the LEFT so the most specific module segment is visible
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        format!("{s:>max$}")
    } else {
        chars[chars.len() - max..].iter().collect()
    }
}
