/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   avocado.csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Dataset (sorted by date)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, unique regions/types, date span
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  region/type/date predicate → price + volume series
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
