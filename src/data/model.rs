use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single region/type/week observation of price and volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub region: String,
    /// "conventional" or "organic" in the published data.
    pub kind: String,
    /// Average price of a single avocado, in dollars.
    pub average_price: f64,
    /// Number of avocados sold.
    pub total_volume: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed dropdown values.
///
/// Built once at startup and only ever handed out by reference.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    regions: BTreeSet<String>,
    kinds: BTreeSet<String>,
}

impl Dataset {
    /// Sort the records by date and index their categories.
    ///
    /// The sort is stable, so rows sharing a date keep their file order.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);

        let regions = records.iter().map(|r| r.region.clone()).collect();
        let kinds = records.iter().map(|r| r.kind.clone()).collect();

        Dataset {
            records,
            regions,
            kinds,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sorted unique regions.
    pub fn regions(&self) -> &BTreeSet<String> {
        &self.regions
    }

    /// Sorted unique avocado types.
    pub fn kinds(&self) -> &BTreeSet<String> {
        &self.kinds
    }

    /// First and last date in the table, `None` when empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        let last = self.records.last()?.date;
        Some((first, last))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Series – what the charts draw
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

pub type Series = Vec<SeriesPoint>;

/// Price and volume series projected from the same set of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSeries {
    pub price: Series,
    pub volume: Series,
}

impl FilteredSeries {
    pub fn len(&self) -> usize {
        self.price.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
    }
}
