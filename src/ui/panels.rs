use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::data::filter::FilterParams;
use crate::state::AppState;

pub const APP_TITLE: &str = "Avocado Analytics: Understand Your Avocados!";

const HEADER_DESCRIPTION: &str = "Analyze the behavior of avocado prices and the number of avocados \
                                  sold in the US between 2015 and 2018";

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Render the title banner.
pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("🥑").size(40.0));
        ui.label(RichText::new("Avocado Analytics").size(32.0).strong());
        ui.label(RichText::new(HEADER_DESCRIPTION).weak());
        ui.add_space(8.0);
    });
}

// ---------------------------------------------------------------------------
// Filter menu
// ---------------------------------------------------------------------------

/// Render the region / type / date range filters.
///
/// Each widget edits a local copy; only the values that actually changed
/// reach the state (and recompute the series).
pub fn filter_menu(ui: &mut Ui, state: &mut AppState) {
    let mut region = state.selection.region.clone();
    let mut kind = state.selection.kind.clone();
    let mut start = state.selection.start;
    let mut end = state.selection.end;

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong("Region");
            egui::ComboBox::from_id_salt("region-filter")
                .selected_text(&region)
                .width(180.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for r in state.dataset.regions() {
                        ui.selectable_value(&mut region, r.clone(), r);
                    }
                });
        });

        ui.add_space(16.0);

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Type");
            egui::ComboBox::from_id_salt("type-filter")
                .selected_text(&kind)
                .width(140.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for k in state.dataset.kinds() {
                        ui.selectable_value(&mut kind, k.clone(), k);
                    }
                });
        });

        ui.add_space(16.0);

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Date Range");
            ui.horizontal(|ui: &mut Ui| {
                ui.add(DatePickerButton::new(&mut start).id_salt("start-date"));
                ui.label("→");
                ui.add(DatePickerButton::new(&mut end).id_salt("end-date"));
            });
        });
    });

    state.apply_edits(FilterParams {
        region,
        kind,
        start,
        end,
    });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Render the record counts at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} records loaded, {} shown",
            state.dataset.len(),
            state.series.len()
        ));
        if let Some((first, last)) = state.dataset.date_span() {
            ui.separator();
            ui.label(format!("data from {first} to {last}"));
        }
    });
}
