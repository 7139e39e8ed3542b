// LogLens - app/controller.rs
//
// Filter controller: owns the dropdown's identity, its option list, and the
// currently selected value, and applies change events to the rows.
// Application layer: depends on core only.

use crate::core::filter::apply_filter;
use crate::core::model::LogEntry;

/// Wiring between the level dropdown and the rows it controls.
///
/// Constructed once at startup via [`FilterController::bind`]. When the
/// configuration names no control, `bind` returns `None` and the view simply
/// never filters; nothing else in the app needs to care.
#[derive(Debug, Clone)]
pub struct FilterController {
    /// Identifier of the dropdown control this controller is bound to.
    control_id: String,

    /// Dropdown options: the show-all sentinel first, then the configured
    /// level vocabulary in order.
    options: Vec<String>,

    /// Marker class that makes a row subject to filtering.
    entry_class: String,

    /// The sentinel value that shows every marked row.
    show_all: String,

    /// Currently selected dropdown value.
    selected: String,
}

impl FilterController {
    /// Wire the controller to its dropdown.
    ///
    /// Logs one fixed diagnostic line first, then inspects `control`: an
    /// empty identifier means the view has no dropdown to bind, and the
    /// whole feature quietly stands down (`None`).
    pub fn bind(
        control: &str,
        levels: &[String],
        entry_class: &str,
        show_all: &str,
    ) -> Option<Self> {
        tracing::info!("Filter controller loaded");

        if control.trim().is_empty() {
            tracing::debug!("No filter control configured; filtering disabled");
            return None;
        }

        let mut options = Vec::with_capacity(levels.len() + 1);
        options.push(show_all.to_string());
        options.extend(levels.iter().cloned());

        Some(Self {
            control_id: control.to_string(),
            options,
            entry_class: entry_class.to_string(),
            show_all: show_all.to_string(),
            selected: show_all.to_string(),
        })
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// Option list for the dropdown, sentinel first.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Handle a change event from the dropdown.
    ///
    /// Records the new value and re-evaluates every marked row against it.
    /// The value is taken as-is; a value outside the option list is legal
    /// and hides everything it fails to match.
    pub fn on_change(&mut self, value: &str, entries: &mut [LogEntry]) {
        self.selected = value.to_string();
        apply_filter(entries, &self.selected, &self.entry_class, &self.show_all);
        tracing::debug!(value = %self.selected, "Filter applied");
    }

    /// Reset the selection to the show-all sentinel without touching rows.
    ///
    /// Used after a reload, where the fresh rows are already visible and
    /// only the dropdown needs to snap back.
    pub fn reset(&mut self) {
        self.selected = self.show_all.clone();
    }
}
