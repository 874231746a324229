/// Data layer: row model and file loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (all cells as text)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>, column names in header order
///   └──────────┘
///        │
///        ▼
///     query layer
/// ```

pub mod loader;
pub mod model;
