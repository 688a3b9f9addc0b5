use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

pub const DEFAULT_DATA_PATH: &str = "avocado.csv";

/// Avocado Analytics: understand your avocados.
#[derive(Debug, Clone, Parser)]
#[command(name = "avocado-analytics", version, about)]
pub struct Config {
    /// CSV (or TSV) file with the avocado price history.
    #[arg(long, short, env = "AVOCADO_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Initial region filter (defaults to Houston).
    #[arg(long)]
    pub region: Option<String>,

    /// Initial avocado type filter (defaults to organic).
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Initial start date, YYYY-MM-DD (defaults to the first date in the data).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Initial end date, YYYY-MM-DD (defaults to the last date in the data).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Print both chart figures as JSON and exit instead of opening a window.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_flags() {
        let cfg = Config::try_parse_from([
            "avocado-analytics",
            "--data",
            "prices.tsv",
            "--region",
            "Albany",
            "--type",
            "conventional",
            "--start",
            "2016-01-03",
            "--json",
        ])
        .unwrap();

        assert_eq!(cfg.data, PathBuf::from("prices.tsv"));
        assert_eq!(cfg.region.as_deref(), Some("Albany"));
        assert_eq!(cfg.kind.as_deref(), Some("conventional"));
        assert_eq!(cfg.start, NaiveDate::from_ymd_opt(2016, 1, 3));
        assert_eq!(cfg.end, None);
        assert!(cfg.json);
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = Config::try_parse_from(["avocado-analytics", "--start", "03/01/2016"]);
        assert!(err.is_err());
    }
}
