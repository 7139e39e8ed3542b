// LogLens - ui/theme.rs
//
// Colour scheme, level colour mapping, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for a level tag (lower-case).
pub fn level_colour(level: &str) -> Color32 {
    match level {
        "critical" => Color32::from_rgb(220, 38, 38), // Red 600
        "error" => Color32::from_rgb(185, 28, 28),    // Red 800
        "warning" => Color32::from_rgb(217, 119, 6),  // Amber 600
        "info" => Color32::from_rgb(59, 130, 246),    // Blue 500
        "debug" => Color32::from_rgb(107, 114, 128),  // Gray 500
        _ => Color32::from_rgb(75, 85, 99),           // Gray 600
    }
}

/// Foreground colour for row body text.
pub fn row_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(229, 231, 235) // Gray 200
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Layout constants.
pub const DETAIL_PANE_HEIGHT: f32 = 180.0;
pub const ROW_HEIGHT: f32 = 20.0;
