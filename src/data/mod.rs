/// Data layer: CSV loading and column resolution.
///
/// Architecture:
/// ```text
///   file.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader   │  parse file → CsvTable (headers + raw records)
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  table    │  resolve x/y names → ColumnSchema → Vec<Sample>
///   └──────────┘
/// ```

pub mod loader;
pub mod table;
