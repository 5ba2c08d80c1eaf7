/// Chart layer: deterministic figure data built from the loaded tables.
///
/// ```text
///   SensorData ──► series   – pressure / level time series
///              ──► spectrum – one row as (frequency, amplitude) points
///              ──► heatmap  – band × time amplitude grid
/// ```
///
/// Everything here is pure: same inputs, same output data. The UI layer
/// renders the returned values and owns all egui state.
pub mod heatmap;
pub mod series;
pub mod spectrum;

use thiserror::Error;

/// Why a figure could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("dataset has no rows")]
    EmptyDataset,
}
