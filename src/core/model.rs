// LogLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// (Core depends on std and chrono only).
//
// These types are the shared vocabulary across all layers.

use chrono::NaiveDateTime;
use std::collections::BTreeSet;

// =============================================================================
// Log Entry (one rendered row)
// =============================================================================

/// A single row of the log view.
///
/// Every line of the log file becomes one of these, whether or not it parsed
/// cleanly. Tag classes drive filtering; `visible` is the current display
/// state and is only ever changed by a filter event or a reload.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Monotonically increasing unique ID within one load.
    pub id: u64,

    /// Line number in the source file (1-based).
    pub line_number: u64,

    /// Tag classes attached to this row: the entry marker class plus one
    /// class per level whose marker appears in the line. Sorted and
    /// deduplicated.
    pub classes: BTreeSet<String>,

    /// Parsed timestamp. `None` if the line had no parseable timestamp.
    pub timestamp: Option<NaiveDateTime>,

    /// Logger name (e.g. "app.main.views"). `None` for unparsed lines.
    pub source: Option<String>,

    /// Level field exactly as it appeared in the line (e.g. "WARNING").
    /// `None` for unparsed lines.
    pub level: Option<String>,

    /// Message text. For unparsed lines this is the whole line.
    pub message: String,

    /// Original unmodified text from the source file.
    pub raw_text: String,

    /// Whether this row is currently shown. New rows start visible and
    /// stay that way until the next filter event re-evaluates them.
    pub visible: bool,
}

impl LogEntry {
    /// True if this row carries the given tag class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

// =============================================================================
// Load Summary
// =============================================================================

/// Summary statistics for one completed load of the log file.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    /// Total lines read from the file (before the cap).
    pub total_lines: usize,

    /// Lines that matched the expected record layout.
    pub parsed: usize,

    /// Lines kept as raw rows (tracebacks, continuation lines).
    pub raw: usize,

    /// True if the file was missing and a placeholder row was substituted.
    pub file_missing: bool,

    /// True if the file exceeded max_lines and older lines were dropped.
    pub truncated: bool,
}
