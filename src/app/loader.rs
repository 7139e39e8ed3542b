// LogLens - app/loader.rs
//
// Reads the log file and turns it into display rows. The only place in the
// app that touches the log on disk. Every view action that needs current
// data (startup, reload) goes through here, so the rows always reflect the
// file as it is right now.

use crate::core::model::{LoadSummary, LogEntry};
use crate::core::parser;
use crate::util::constants::MISSING_LOG_PLACEHOLDER;
use crate::util::error::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Rows plus statistics from one load.
#[derive(Debug)]
pub struct LoadResult {
    pub entries: Vec<LogEntry>,
    pub summary: LoadSummary,
}

/// Load the log file into display rows.
///
/// A missing file is not an error: the view gets a single placeholder row
/// instead, mirroring the page a user would see before the first log line
/// is ever written. Genuine read failures are returned as [`LoadError`].
///
/// Files longer than `max_lines` are tail-trimmed: the oldest lines are
/// dropped and the kept rows retain their original line numbers.
pub fn load_entries(
    path: &Path,
    levels: &[String],
    entry_class: &str,
    max_lines: usize,
) -> Result<LoadResult, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Log file not found; showing placeholder");
            let entries = parser::parse_content(MISSING_LOG_PLACEHOLDER, levels, entry_class, 0);
            let summary = LoadSummary {
                total_lines: 0,
                parsed: 0,
                raw: entries.len(),
                file_missing: true,
                truncated: false,
            };
            return Ok(LoadResult { entries, summary });
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let skipped = total_lines.saturating_sub(max_lines);

    let entries = if skipped > 0 {
        tracing::warn!(
            path = %path.display(),
            total_lines,
            max_lines,
            "Log file exceeds line cap; dropping oldest lines"
        );
        let tail = lines[skipped..].join("\n");
        let mut entries = parser::parse_content(&tail, levels, entry_class, 0);
        for entry in &mut entries {
            entry.line_number += skipped as u64;
        }
        entries
    } else {
        parser::parse_content(&content, levels, entry_class, 0)
    };

    let parsed = entries.iter().filter(|e| e.level.is_some()).count();
    let raw = entries.len() - parsed;

    tracing::info!(
        path = %path.display(),
        rows = entries.len(),
        parsed,
        raw,
        "Log file loaded"
    );

    Ok(LoadResult {
        entries,
        summary: LoadSummary {
            total_lines,
            parsed,
            raw,
            file_missing: false,
            truncated: skipped > 0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::{DEFAULT_ENTRY_CLASS, DEFAULT_LEVELS};
    use std::fs;

    fn levels() -> Vec<String> {
        DEFAULT_LEVELS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_file_yields_placeholder_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let result = load_entries(&path, &levels(), DEFAULT_ENTRY_CLASS, 1000).unwrap();

        assert!(result.summary.file_missing);
        assert_eq!(result.entries.len(), 1);
        let row = &result.entries[0];
        assert_eq!(row.message, MISSING_LOG_PLACEHOLDER);
        assert!(row.level.is_none());
        assert!(row.has_class(DEFAULT_ENTRY_CLASS));
        assert!(row.visible);
    }

    #[test]
    fn test_load_counts_parsed_and_raw_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(
            &path,
            "2024-03-02 10:15:04,123 - app - INFO - started\n\
             Traceback (most recent call last):\n\
             2024-03-02 10:15:05,001 - app - ERROR - boom\n",
        )
        .unwrap();

        let result = load_entries(&path, &levels(), DEFAULT_ENTRY_CLASS, 1000).unwrap();

        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.summary.total_lines, 3);
        assert_eq!(result.summary.parsed, 2);
        assert_eq!(result.summary.raw, 1);
        assert!(!result.summary.file_missing);
        assert!(!result.summary.truncated);
    }

    #[test]
    fn test_line_cap_keeps_most_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut content = String::new();
        for i in 1..=5 {
            content.push_str(&format!(
                "2024-03-02 10:15:0{i},000 - app - INFO - line {i}\n"
            ));
        }
        fs::write(&path, content).unwrap();

        let result = load_entries(&path, &levels(), DEFAULT_ENTRY_CLASS, 2).unwrap();

        assert!(result.summary.truncated);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].line_number, 4);
        assert_eq!(result.entries[1].line_number, 5);
        assert!(result.entries[0].message.ends_with("line 4"));
    }

    #[test]
    fn test_empty_file_yields_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "").unwrap();

        let result = load_entries(&path, &levels(), DEFAULT_ENTRY_CLASS, 1000).unwrap();

        assert!(result.entries.is_empty());
        assert!(!result.summary.file_missing);
    }

    #[test]
    fn test_unreadable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory is not readable as a file.
        let result = load_entries(dir.path(), &levels(), DEFAULT_ENTRY_CLASS, 1000);
        assert!(result.is_err());
    }
}
