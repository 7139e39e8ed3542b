// LogLens - ui/panels/filter_bar.rs
//
// The level dropdown. Rendered only when a filter controller is bound;
// a view without one simply has no filter bar.

use crate::app::state::AppState;

/// Render the filter bar (top panel, below the menu).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(controller) = state.controller.as_ref() else {
        return;
    };

    // Snapshot before handing a &mut String to the combo box, so the change
    // event fires only when the user actually picks a different value.
    let control_id = controller.control_id().to_string();
    let options = controller.options().to_vec();
    let mut selected = controller.selected().to_string();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Level:");
        egui::ComboBox::from_id_salt(control_id)
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                for option in &options {
                    if ui
                        .selectable_value(&mut selected, option.clone(), option)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });

    if changed {
        state.on_filter_change(&selected);
    }
}
