use chrono::NaiveDate;

use super::model::{Dataset, FilteredSeries, Record, SeriesPoint};

// ---------------------------------------------------------------------------
// Filter predicate: one region, one type, an inclusive date window
// ---------------------------------------------------------------------------

/// The four dashboard filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub region: String,
    pub kind: String,
    /// Inclusive lower bound.
    pub start: NaiveDate,
    /// Inclusive upper bound.
    pub end: NaiveDate,
}

impl FilterParams {
    /// Whether a record passes this filter.
    ///
    /// Region and type match exactly (case-sensitive). An unknown value or
    /// an inverted date range simply matches nothing.
    pub fn matches(&self, record: &Record) -> bool {
        record.region == self.region
            && record.kind == self.kind
            && self.start <= record.date
            && record.date <= self.end
    }
}

/// Return indices of records that pass the filter, in dataset order.
pub fn matching_indices(dataset: &Dataset, params: &FilterParams) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| params.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Project the matching records into a price series and a volume series.
///
/// Every call rescans the whole dataset; nothing is cached between calls.
pub fn filter(dataset: &Dataset, params: &FilterParams) -> FilteredSeries {
    let mut out = FilteredSeries::default();
    if params.start > params.end {
        return out;
    }

    for record in dataset.records().iter().filter(|r| params.matches(r)) {
        out.price.push(SeriesPoint {
            date: record.date,
            value: record.average_price,
        });
        out.volume.push(SeriesPoint {
            date: record.date,
            value: record.total_volume,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn rec(d: &str, region: &str, kind: &str, price: f64, volume: f64) -> Record {
        Record {
            date: date(d),
            region: region.to_string(),
            kind: kind.to_string(),
            average_price: price,
            total_volume: volume,
        }
    }

    fn params(region: &str, kind: &str, start: &str, end: &str) -> FilterParams {
        FilterParams {
            region: region.to_string(),
            kind: kind.to_string(),
            start: date(start),
            end: date(end),
        }
    }

    fn example_dataset() -> Dataset {
        Dataset::from_records(vec![
            rec("2015-01-04", "Houston", "organic", 1.20, 1000.0),
            rec("2015-01-11", "Houston", "organic", 1.35, 1100.0),
            rec("2015-01-04", "Albany", "conventional", 0.99, 5000.0),
        ])
    }

    #[test]
    fn selects_region_type_and_window() {
        let ds = example_dataset();
        let out = filter(&ds, &params("Houston", "organic", "2015-01-01", "2015-01-31"));

        assert_eq!(
            out.price,
            vec![
                SeriesPoint { date: date("2015-01-04"), value: 1.20 },
                SeriesPoint { date: date("2015-01-11"), value: 1.35 },
            ]
        );
        assert_eq!(
            out.volume,
            vec![
                SeriesPoint { date: date("2015-01-04"), value: 1000.0 },
                SeriesPoint { date: date("2015-01-11"), value: 1100.0 },
            ]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = example_dataset();
        let out = filter(&ds, &params("Houston", "organic", "2015-01-04", "2015-01-11"));
        assert_eq!(out.len(), 2);

        let single_day = filter(&ds, &params("Houston", "organic", "2015-01-11", "2015-01-11"));
        assert_eq!(single_day.price.len(), 1);
        assert_eq!(single_day.price[0].value, 1.35);
    }

    #[test]
    fn inverted_range_is_empty() {
        let ds = example_dataset();
        let out = filter(&ds, &params("Houston", "organic", "2015-01-31", "2015-01-01"));
        assert!(out.price.is_empty());
        assert!(out.volume.is_empty());
    }

    #[test]
    fn unknown_categories_are_empty() {
        let ds = example_dataset();
        assert!(filter(&ds, &params("Atlantis", "organic", "2015-01-01", "2015-12-31")).is_empty());
        assert!(filter(&ds, &params("Houston", "Organic", "2015-01-01", "2015-12-31")).is_empty());
        assert!(filter(&ds, &params("houston", "organic", "2015-01-01", "2015-12-31")).is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let ds = example_dataset();
        let p = params("Houston", "organic", "2015-01-01", "2015-01-31");
        assert_eq!(filter(&ds, &p), filter(&ds, &p));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn matching_indices_follow_dataset_order() {
        let ds = example_dataset();
        let idx = matching_indices(&ds, &params("Houston", "organic", "2015-01-01", "2015-01-31"));
        let dates: Vec<NaiveDate> = idx.iter().map(|&i| ds.records()[i].date).collect();
        assert_eq!(dates, [date("2015-01-04"), date("2015-01-11")]);
    }
}
