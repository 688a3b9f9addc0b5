use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use super::model::{Dataset, Record};
use crate::error::LoadError;

/// Format of the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const COL_DATE: &str = "Date";
pub const COL_AVERAGE_PRICE: &str = "AveragePrice";
pub const COL_TOTAL_VOLUME: &str = "Total Volume";
pub const COL_TYPE: &str = "type";
pub const COL_REGION: &str = "region";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the avocado dataset from a delimited file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`         – comma separated
/// * `.tsv`, `.tab` – tab separated
///
/// Only `Date`, `AveragePrice`, `Total Volume`, `type` and `region` are read;
/// every other column is ignored. A single bad row fails the whole load.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "csv" => b',',
        "tsv" | "tab" => b'\t',
        other => {
            return Err(LoadError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_reader(file, delimiter)?;

    match dataset.date_span() {
        Some((first, last)) => log::info!(
            "Loaded {} records from {} ({} regions, {first} to {last})",
            dataset.len(),
            path.display(),
            dataset.regions().len(),
        ),
        None => log::warn!("{} contains no records", path.display()),
    }

    Ok(dataset)
}

/// Parse a delimited table from any reader.
pub fn load_reader<R: std::io::Read>(reader: R, delimiter: u8) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(columns.parse_row(&row)?);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Positions of the required columns within the header row.
struct ColumnIndex {
    date: usize,
    price: usize,
    volume: usize,
    kind: usize,
    region: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn { column })
        };

        Ok(ColumnIndex {
            date: find(COL_DATE)?,
            price: find(COL_AVERAGE_PRICE)?,
            volume: find(COL_TOTAL_VOLUME)?,
            kind: find(COL_TYPE)?,
            region: find(COL_REGION)?,
        })
    }

    fn parse_row(&self, row: &StringRecord) -> Result<Record, LoadError> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let raw_date = field(self.date);
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|e| LoadError::malformed(line, COL_DATE, raw_date, e.to_string()))?;

        let average_price = parse_number(line, COL_AVERAGE_PRICE, field(self.price))?;
        let total_volume = parse_number(line, COL_TOTAL_VOLUME, field(self.volume))?;
        if total_volume < 0.0 {
            return Err(LoadError::malformed(
                line,
                COL_TOTAL_VOLUME,
                field(self.volume),
                "volume cannot be negative",
            ));
        }

        Ok(Record {
            date,
            region: field(self.region).to_string(),
            kind: field(self.kind).to_string(),
            average_price,
            total_volume,
        })
    }
}

fn parse_number(line: u64, column: &'static str, raw: &str) -> Result<f64, LoadError> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| LoadError::malformed(line, column, raw, e.to_string()))?;
    if !value.is_finite() {
        return Err(LoadError::malformed(line, column, raw, "not a finite number"));
    }
    Ok(value)
}
