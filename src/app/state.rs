// LogLens - app/state.rs
//
// Application state management. Holds the loaded rows, the filter
// controller, selection, and the status line.
// Owned by the eframe::App implementation.

use crate::app::controller::FilterController;
use crate::app::loader;
use crate::core::model::{LoadSummary, LogEntry};
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Path of the log file being viewed.
    pub log_path: PathBuf,

    /// Configured level vocabulary (lower-case tag strings).
    pub levels: Vec<String>,

    /// Marker class attached to every row.
    pub entry_class: String,

    /// Line cap applied when loading.
    pub max_lines: usize,

    /// All rows from the most recent load.
    pub entries: Vec<LogEntry>,

    /// Statistics from the most recent load.
    pub summary: LoadSummary,

    /// Filter wiring, or `None` when no control is configured.
    pub controller: Option<FilterController>,

    /// ID of the currently selected row, if any.
    pub selected_id: Option<u64>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from config validation, shown at startup.
    pub warnings: Vec<String>,
}

impl AppState {
    /// Create initial state. Call [`AppState::load`] afterwards to populate.
    pub fn new(
        log_path: PathBuf,
        levels: Vec<String>,
        entry_class: String,
        max_lines: usize,
        controller: Option<FilterController>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            log_path,
            levels,
            entry_class,
            max_lines,
            entries: Vec::new(),
            summary: LoadSummary::default(),
            controller,
            selected_id: None,
            status_message: "Ready.".to_string(),
            warnings,
        }
    }

    /// Load (or reload) the log file.
    ///
    /// Replaces all rows with a fresh read of the file, clears the
    /// selection, and snaps the dropdown back to show-all. A reload behaves
    /// exactly like the first load: new rows are born visible.
    pub fn load(&mut self) {
        match loader::load_entries(
            &self.log_path,
            &self.levels,
            &self.entry_class,
            self.max_lines,
        ) {
            Ok(result) => {
                self.entries = result.entries;
                self.summary = result.summary;
                self.selected_id = None;
                if let Some(controller) = self.controller.as_mut() {
                    controller.reset();
                }
                self.status_message = self.status_after_load();
            }
            Err(e) => {
                tracing::error!(error = %e, "Load failed");
                self.entries.clear();
                self.summary = LoadSummary::default();
                self.selected_id = None;
                self.status_message = e.to_string();
            }
        }
    }

    /// Handle a change event from the level dropdown.
    ///
    /// Does nothing when no controller is bound. Otherwise re-evaluates
    /// every marked row against the new value and drops the selection if
    /// the selected row is no longer visible.
    pub fn on_filter_change(&mut self, value: &str) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        controller.on_change(value, &mut self.entries);

        if let Some(id) = self.selected_id {
            let still_visible = self.entries.iter().any(|e| e.id == id && e.visible);
            if !still_visible {
                self.selected_id = None;
            }
        }

        self.status_message = format!(
            "Showing {} of {} rows",
            self.visible_count(),
            self.entries.len()
        );
    }

    /// Number of rows currently shown.
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }

    /// Get the currently selected row, if any.
    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.selected_id
            .and_then(|id| self.entries.iter().find(|e| e.id == id))
    }

    fn status_after_load(&self) -> String {
        if self.summary.file_missing {
            format!(
                "Log file '{}' not found; showing placeholder",
                self.log_path.display()
            )
        } else if self.summary.truncated {
            format!(
                "Loaded last {} of {} lines from '{}'",
                self.entries.len(),
                self.summary.total_lines,
                self.log_path.display()
            )
        } else {
            format!(
                "Loaded {} rows from '{}'",
                self.entries.len(),
                self.log_path.display()
            )
        }
    }
}
