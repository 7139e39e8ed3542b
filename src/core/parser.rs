// LogLens - core/parser.rs
//
// Parses the application log's record layout and tags each row with the
// classes the filter operates on. Core layer: accepts string content,
// never touches the filesystem.

use crate::core::model::LogEntry;
use chrono::NaiveDateTime;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Record layout written by the application logger:
///
/// ```text
/// 2024-03-02 10:15:04,123 - app.main.views - INFO - Request handled
/// ```
///
/// Named groups: timestamp, source, level, message. The source group is
/// lazy so a message containing " - " does not shift the field boundaries.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}) - (?P<source>.+?) - (?P<level>[A-Z]+) - (?P<message>.*)$",
        )
        .expect("line_pattern: invalid regex")
    })
}

/// Parse log file content into display rows.
///
/// Every non-empty line becomes a row. Lines matching the record layout get
/// structured fields; anything else (tracebacks, continuation lines) is kept
/// as a raw row so nothing in the file is hidden from the view.
///
/// Tagging is substring-based: a row carries the entry marker class plus one
/// class per configured level whose upper-case name appears anywhere in the
/// line. A message that mentions ERROR is therefore reachable from both its
/// own level and the error filter.
///
/// # Arguments
/// * `content` - File content as a string (the app layer handles reading)
/// * `levels` - Configured level vocabulary, lower-case tag strings
/// * `entry_class` - Marker class attached to every row
/// * `id_start` - Starting ID for rows (fresh loads pass 0)
pub fn parse_content(
    content: &str,
    levels: &[String],
    entry_class: &str,
    id_start: u64,
) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let mut current_id = id_start;

    for (line_idx, line) in content.lines().enumerate() {
        let line_number = (line_idx as u64) + 1;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let classes = classify_line(line, levels, entry_class);

        let entry = if let Some(caps) = line_pattern().captures(line) {
            let message = caps
                .name("message")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            // Timestamp failures are non-fatal: the row is still shown,
            // just without a parsed time.
            let timestamp = caps
                .name("timestamp")
                .and_then(|m| parse_timestamp(m.as_str()));

            LogEntry {
                id: current_id,
                line_number,
                classes,
                timestamp,
                source: caps.name("source").map(|m| m.as_str().to_string()),
                level: caps.name("level").map(|m| m.as_str().to_string()),
                message,
                raw_text: line.to_string(),
                visible: true,
            }
        } else {
            // Unstructured line (traceback frame, wrapped text): keep raw.
            LogEntry {
                id: current_id,
                line_number,
                classes,
                timestamp: None,
                source: None,
                level: None,
                message: line.to_string(),
                raw_text: line.to_string(),
                visible: true,
            }
        };

        entries.push(entry);
        current_id += 1;
    }

    tracing::debug!(rows = entries.len(), "Parsing complete");

    entries
}

/// Compute the tag classes for one line.
///
/// The entry marker class is always present. Level matching is
/// case-sensitive against the upper-cased level name, so "error" in prose
/// does not tag a row but "ERROR" anywhere in the line does.
fn classify_line(line: &str, levels: &[String], entry_class: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    classes.insert(entry_class.to_string());
    for level in levels {
        if line.contains(&level.to_uppercase()) {
            classes.insert(level.clone());
        }
    }
    classes
}

/// Parse the logger's comma-millisecond timestamp (e.g. "2024-03-02 10:15:04,123").
///
/// The comma is swapped for a dot so chrono's `%.f` specifier accepts it.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalised = raw.replace(',', ".");
    NaiveDateTime::parse_from_str(&normalised, "%Y-%m-%d %H:%M:%S%.f").ok()
}
