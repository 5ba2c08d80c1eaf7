/// Data layer: core tables, loading, and summary statistics.
///
/// ```text
///  acoustic .csv      pressure .csv
///        │                 │
///        ▼                 ▼
///   ┌───────────────────────────┐
///   │          loader            │  parse + validate → SensorData
///   └───────────────────────────┘
///        │
///        ▼
///   ┌───────────────────────────┐
///   │ AcousticDataset /          │  immutable, sorted by timestamp
///   │ PressureDataset            │
///   └───────────────────────────┘
///        │
///        ▼
///   ┌───────────────────────────┐
///   │          stats             │  min/max/mean/count summaries
///   └───────────────────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
