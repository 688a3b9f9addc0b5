use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use clap::Parser;
use serde::Serialize;

/// Write a synthetic avocado price history in the published column layout.
#[derive(Debug, Parser)]
#[command(name = "generate-sample")]
struct Args {
    /// Output CSV path.
    #[arg(long, short, default_value = "avocado.csv")]
    out: PathBuf,

    /// PRNG seed; the same seed always writes the same file.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One output row. Field order matches the header of the public dataset.
#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "")]
    index: usize,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "AveragePrice")]
    average_price: f64,
    #[serde(rename = "Total Volume")]
    total_volume: f64,
    #[serde(rename = "4046")]
    plu_4046: f64,
    #[serde(rename = "4225")]
    plu_4225: f64,
    #[serde(rename = "4770")]
    plu_4770: f64,
    #[serde(rename = "Total Bags")]
    total_bags: f64,
    #[serde(rename = "Small Bags")]
    small_bags: f64,
    #[serde(rename = "Large Bags")]
    large_bags: f64,
    #[serde(rename = "XLarge Bags")]
    xlarge_bags: f64,
    #[serde(rename = "type")]
    kind: &'a str,
    year: i32,
    region: &'a str,
}

/// Region name and weekly conventional volume baseline.
const REGIONS: [(&str, f64); 8] = [
    ("Albany", 80_000.0),
    ("Atlanta", 450_000.0),
    ("Boston", 550_000.0),
    ("Chicago", 700_000.0),
    ("Houston", 850_000.0),
    ("LosAngeles", 2_500_000.0),
    ("Seattle", 400_000.0),
    ("TotalUS", 30_000_000.0),
];

/// Type name, price baseline, share of the conventional volume.
const KINDS: [(&str, f64, f64); 2] = [("conventional", 1.10, 1.0), ("organic", 1.60, 0.03)];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Prices peak in late summer, volumes around the Super Bowl and in spring.
fn seasonal(date: NaiveDate, peak_day: f64) -> f64 {
    let phase = (date.ordinal() as f64 - peak_day) / 365.25 * 2.0 * std::f64::consts::PI;
    phase.cos()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Write one row per week from 2015-01-04 through `last` for every
/// region/type pair. Returns the number of rows written.
fn write_sample(out: &Path, seed: u64, last: NaiveDate) -> Result<usize> {
    let mut rng = SimpleRng::new(seed);

    // Weekly Sundays, same start as the public dataset.
    let first = NaiveDate::from_ymd_opt(2015, 1, 4).context("invalid start date")?;
    let weeks: Vec<NaiveDate> = std::iter::successors(Some(first), |d| Some(*d + Duration::weeks(1)))
        .take_while(|d| *d <= last)
        .collect();

    let mut writer =
        csv::Writer::from_path(out).with_context(|| format!("creating {}", out.display()))?;

    let mut n_rows = 0usize;
    for &(kind, base_price, share) in &KINDS {
        for &(region, base_volume) in &REGIONS {
            // The public file numbers rows per region/type/year block.
            let mut index = 0usize;
            let mut year = first.year();
            for &date in &weeks {
                if date.year() != year {
                    year = date.year();
                    index = 0;
                }

                let trend = 0.08 * (date.year() - 2015) as f64;
                let price = (base_price + trend + 0.2 * seasonal(date, 240.0) + rng.gauss(0.0, 0.06)).max(0.44);
                let volume = (base_volume * share * (1.0 + 0.15 * seasonal(date, 35.0)) * (1.0 + rng.gauss(0.0, 0.08)))
                    .max(0.0);

                let plu_4046 = volume * 0.35;
                let plu_4225 = volume * 0.33;
                let plu_4770 = volume * 0.02;
                let total_bags = volume - plu_4046 - plu_4225 - plu_4770;
                let small_bags = total_bags * 0.75;
                let large_bags = total_bags * 0.24;

                writer.serialize(Row {
                    index,
                    date: date.format("%Y-%m-%d").to_string(),
                    average_price: round2(price),
                    total_volume: round2(volume),
                    plu_4046: round2(plu_4046),
                    plu_4225: round2(plu_4225),
                    plu_4770: round2(plu_4770),
                    total_bags: round2(total_bags),
                    small_bags: round2(small_bags),
                    large_bags: round2(large_bags),
                    xlarge_bags: round2(total_bags - small_bags - large_bags),
                    kind,
                    year: date.year(),
                    region,
                })?;
                index += 1;
                n_rows += 1;
            }
        }
    }
    writer.flush()?;
    Ok(n_rows)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let last = NaiveDate::from_ymd_opt(2018, 3, 25).context("invalid end date")?;
    let n_rows = write_sample(&args.out, args.seed, last)?;

    println!(
        "Wrote {n_rows} records ({} regions x {} types) to {}",
        REGIONS.len(),
        KINDS.len(),
        args.out.display()
    );
    Ok(())
}
