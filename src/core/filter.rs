// LogLens - core/filter.rs
//
// Level filter for display rows. One dropdown value decides which rows
// carrying the entry marker class are shown.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::LogEntry;

/// Apply a filter value to the rows, mutating each row's `visible` flag.
///
/// This is a fresh pass over the current rows: every row carrying the entry
/// marker class is re-evaluated against `value`, whatever its previous
/// state. Rows without the marker class are never touched.
///
/// Rules, in order:
///   - `value` equal to `show_all` (exact comparison): the row is shown.
///   - otherwise the row is shown only if `value` is one of its tag classes.
///
/// A value that matches no row's classes therefore hides every marked row.
/// Rows added after this pass keep their default visibility until the next
/// pass re-evaluates them.
pub fn apply_filter(entries: &mut [LogEntry], value: &str, entry_class: &str, show_all: &str) {
    for entry in entries.iter_mut() {
        if !entry.has_class(entry_class) {
            continue;
        }
        entry.visible = row_matches(entry, value, show_all);
    }
}

/// Decide visibility for one marked row.
fn row_matches(entry: &LogEntry, value: &str, show_all: &str) -> bool {
    value == show_all || entry.has_class(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = "log-entry";
    const ALL: &str = "all";

    fn make_entry(id: u64, classes: &[&str]) -> LogEntry {
        LogEntry {
            id,
            line_number: id,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            timestamp: None,
            source: None,
            level: None,
            message: format!("entry {id}"),
            raw_text: format!("entry {id}"),
            visible: true,
        }
    }

    fn visible_ids(entries: &[LogEntry]) -> Vec<u64> {
        entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| e.id)
            .collect()
    }

    #[test]
    fn test_show_all_reveals_every_marked_row() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &[ENTRY, "error"]),
            make_entry(3, &[ENTRY, "warning"]),
        ];
        // Hide some rows first, then show-all must bring them back.
        apply_filter(&mut entries, "error", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![2]);

        apply_filter(&mut entries, ALL, ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![1, 2, 3]);
    }

    #[test]
    fn test_specific_value_shows_only_tagged_rows() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &[ENTRY, "error"]),
            make_entry(3, &[ENTRY, "info"]),
        ];
        apply_filter(&mut entries, "info", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![1, 3]);
    }

    #[test]
    fn test_value_matching_nothing_hides_all_marked_rows() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &[ENTRY, "error"]),
        ];
        apply_filter(&mut entries, "verbose", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), Vec::<u64>::new());
    }

    #[test]
    fn test_multi_tag_row_matches_either_tag() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info", "error"]),
            make_entry(2, &[ENTRY, "info"]),
        ];
        apply_filter(&mut entries, "error", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![1]);

        apply_filter(&mut entries, "info", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![1, 2]);
    }

    #[test]
    fn test_mixed_tag_scenario() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &[ENTRY, "error"]),
            make_entry(3, &[ENTRY, "info", "error"]),
        ];

        apply_filter(&mut entries, "error", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![2, 3]);

        apply_filter(&mut entries, ALL, ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![1, 2, 3]);

        apply_filter(&mut entries, "warning", ENTRY, ALL);
        assert_eq!(visible_ids(&entries), Vec::<u64>::new());
    }

    #[test]
    fn test_rows_without_marker_class_are_untouched() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &["banner"]),
            make_entry(3, &["banner", "error"]),
        ];
        entries[2].visible = false;

        apply_filter(&mut entries, "error", ENTRY, ALL);
        assert!(!entries[0].visible, "marked info row hidden");
        assert!(entries[1].visible, "unmarked row keeps its state");
        assert!(
            !entries[2].visible,
            "unmarked row keeps its state even when a tag matches"
        );
    }

    #[test]
    fn test_reapplying_same_value_is_idempotent() {
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &[ENTRY, "error"]),
        ];
        apply_filter(&mut entries, "error", ENTRY, ALL);
        let first: Vec<bool> = entries.iter().map(|e| e.visible).collect();

        apply_filter(&mut entries, "error", ENTRY, ALL);
        let second: Vec<bool> = entries.iter().map(|e| e.visible).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rows_added_after_a_pass_stay_visible_until_next_pass() {
        let mut entries = vec![make_entry(1, &[ENTRY, "info"])];
        apply_filter(&mut entries, "error", ENTRY, ALL);
        assert!(!entries[0].visible);

        // A new row arrives with the default flag; no pass has seen it yet.
        entries.push(make_entry(2, &[ENTRY, "info"]));
        assert!(entries[1].visible);

        // The next pass evaluates it like every other marked row.
        apply_filter(&mut entries, "error", ENTRY, ALL);
        assert!(!entries[1].visible);
    }

    #[test]
    fn test_show_all_comparison_is_exact() {
        let mut entries = vec![make_entry(1, &[ENTRY, "info"])];
        apply_filter(&mut entries, "All", ENTRY, ALL);
        assert!(
            !entries[0].visible,
            "sentinel comparison is case-sensitive, 'All' is an ordinary value"
        );
    }

    #[test]
    fn test_empty_row_set_is_a_no_op() {
        let mut entries: Vec<LogEntry> = Vec::new();
        apply_filter(&mut entries, "info", ENTRY, ALL);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_entry_class_value_shows_every_marked_row() {
        // The marker class is itself a class on every marked row, so using
        // it as the filter value behaves like show-all for marked rows.
        let mut entries = vec![
            make_entry(1, &[ENTRY, "info"]),
            make_entry(2, &[ENTRY, "error"]),
        ];
        apply_filter(&mut entries, ENTRY, ENTRY, ALL);
        assert_eq!(visible_ids(&entries), vec![1, 2]);
    }
}
