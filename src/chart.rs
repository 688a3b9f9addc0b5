//! Static chart configuration and serialisable chart figures.
//!
//! A [`ChartSpec`] is pure presentation data. A [`ChartFigure`] pairs one
//! spec with the points of one projected series, ready for either the egui
//! plot or the `--json` output.

use serde::Serialize;

use crate::data::filter::FilterParams;
use crate::data::model::{FilteredSeries, Series, SeriesPoint};

/// How hover labels render a y value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// `$1.23`
    Dollars,
    /// `64,237`
    Count,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Dollars => format!("${value:.2}"),
            ValueFormat::Count => group_thousands(value.round() as i64),
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    /// Horizontal title anchor as a fraction of the card width.
    pub title_x: f64,
    pub color: &'static str,
    pub y_tick_prefix: &'static str,
    pub hover: ValueFormat,
}

pub const PRICE_CHART: ChartSpec = ChartSpec {
    id: "price-chart",
    title: "Average Price of Avocados",
    title_x: 0.05,
    color: "#17B897",
    y_tick_prefix: "$",
    hover: ValueFormat::Dollars,
};

pub const VOLUME_CHART: ChartSpec = ChartSpec {
    id: "volume-chart",
    title: "Avocados Sold",
    title_x: 0.05,
    color: "#E12D39",
    y_tick_prefix: "",
    hover: ValueFormat::Count,
};

impl ChartSpec {
    /// Y-axis tick label: prefix plus the precision of the hover format.
    pub fn tick_label(&self, value: f64) -> String {
        match self.hover {
            ValueFormat::Dollars => format!("{}{value:.2}", self.y_tick_prefix),
            ValueFormat::Count => format!("{}{}", self.y_tick_prefix, group_thousands(value.round() as i64)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    #[serde(flatten)]
    pub spec: ChartSpec,
    pub points: Vec<SeriesPoint>,
}

impl ChartFigure {
    pub fn new(spec: ChartSpec, series: &Series) -> Self {
        ChartFigure {
            spec,
            points: series.clone(),
        }
    }
}

/// Build the price and volume figures for one filter result.
pub fn figures(series: &FilteredSeries) -> (ChartFigure, ChartFigure) {
    (
        ChartFigure::new(PRICE_CHART, &series.price),
        ChartFigure::new(VOLUME_CHART, &series.volume),
    )
}

/// The headless output: the filters used plus both chart figures.
pub fn report(params: &FilterParams, series: &FilteredSeries) -> serde_json::Value {
    let (price, volume) = figures(series);
    serde_json::json!({
        "filters": {
            "region": params.region,
            "type": params.kind,
            "start_date": params.start,
            "end_date": params.end,
        },
        "price_chart": price,
        "volume_chart": volume,
    })
}
