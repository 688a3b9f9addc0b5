use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::Config;
use crate::data::filter::{filter, FilterParams};
use crate::data::model::{Dataset, FilteredSeries};

pub const DEFAULT_REGION: &str = "Houston";
pub const DEFAULT_KIND: &str = "organic";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Dataset,

    /// Current filter selection.
    pub selection: FilterParams,

    /// Series for the current selection, recomputed on every change.
    pub series: FilteredSeries,
}

impl AppState {
    pub fn new(dataset: Dataset, selection: FilterParams) -> Self {
        let series = filter(&dataset, &selection);
        Self {
            dataset,
            selection,
            series,
        }
    }

    /// Recompute `series` after a selection change.
    pub fn refilter(&mut self) {
        self.series = filter(&self.dataset, &self.selection);
        log::debug!(
            "{} / {} from {} to {}: {} points",
            self.selection.region,
            self.selection.kind,
            self.selection.start,
            self.selection.end,
            self.series.len()
        );
    }

    pub fn set_region(&mut self, region: String) {
        if self.selection.region != region {
            self.selection.region = region;
            self.refilter();
        }
    }

    pub fn set_kind(&mut self, kind: String) {
        if self.selection.kind != kind {
            self.selection.kind = kind;
            self.refilter();
        }
    }

    /// Set the start date, clamped to the data's date span.
    pub fn set_start(&mut self, date: NaiveDate) {
        let date = self.clamp_to_span(date);
        if self.selection.start != date {
            self.selection.start = date;
            self.refilter();
        }
    }

    /// Set the end date, clamped to the data's date span.
    pub fn set_end(&mut self, date: NaiveDate) {
        let date = self.clamp_to_span(date);
        if self.selection.end != date {
            self.selection.end = date;
            self.refilter();
        }
    }

    /// Apply the values edited in the filter menu.
    ///
    /// Only fields that differ from the current selection go through the
    /// setters, so untouched dates keep the value they started with.
    pub fn apply_edits(&mut self, edited: FilterParams) {
        let FilterParams {
            region,
            kind,
            start,
            end,
        } = edited;

        self.set_region(region);
        self.set_kind(kind);
        if start != self.selection.start {
            self.set_start(start);
        }
        if end != self.selection.end {
            self.set_end(end);
        }
    }

    // Start and end are clamped independently; an inverted range is kept.
    fn clamp_to_span(&self, date: NaiveDate) -> NaiveDate {
        match self.dataset.date_span() {
            Some((min, max)) => date.clamp(min, max),
            None => date,
        }
    }
}

/// Resolve the initial selection from the configuration and the data.
///
/// Explicit values win. Otherwise region and type fall back to Houston and
/// organic when present (else the first value), and dates to the full span.
pub fn initial_selection(dataset: &Dataset, config: &Config) -> FilterParams {
    let (min, max) = dataset.date_span().unwrap_or_default();

    FilterParams {
        region: pick_category(&config.region, DEFAULT_REGION, dataset.regions()),
        kind: pick_category(&config.kind, DEFAULT_KIND, dataset.kinds()),
        start: config.start.unwrap_or(min),
        end: config.end.unwrap_or(max),
    }
}

fn pick_category(explicit: &Option<String>, preferred: &str, values: &BTreeSet<String>) -> String {
    if let Some(value) = explicit {
        return value.clone();
    }
    if values.contains(preferred) {
        return preferred.to_string();
    }
    values.iter().next().cloned().unwrap_or_default()
}
