use chrono::NaiveDateTime;

use super::ChartError;
use crate::data::model::AcousticDataset;

// ---------------------------------------------------------------------------
// Heatmap grid
// ---------------------------------------------------------------------------

/// Bounds of the UI-adjustable heatmap sample count.
pub const MIN_SAMPLES: usize = 50;
pub const MAX_SAMPLES: usize = 500;

/// Band × time amplitude grid over the leading rows of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    /// Time axis length (number of leading rows shown).
    pub cols: usize,
    /// Frequency axis length (number of bands).
    pub rows: usize,
    /// Row-major values: `values[band * cols + time]`.
    pub values: Vec<f64>,
    pub min: f64,
    pub max: f64,
    /// Time span covered by the grid.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl HeatmapGrid {
    pub fn value(&self, band: usize, time: usize) -> f64 {
        self.values[band * self.cols + time]
    }

    /// Value scaled to 0..=1 for color mapping. A flat grid maps to 0.
    pub fn normalized(&self, band: usize, time: usize) -> f64 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            0.0
        } else {
            (self.value(band, time) - self.min) / range
        }
    }
}

/// Build the grid over the first `samples` rows. The requested count clamps
/// to `MIN_SAMPLES..=MAX_SAMPLES` and then to the number of rows available.
pub fn heatmap_grid(ds: &AcousticDataset, samples: usize) -> Result<HeatmapGrid, ChartError> {
    if ds.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let cols = samples.clamp(MIN_SAMPLES, MAX_SAMPLES).min(ds.len());
    let rows = ds.band_count();

    let mut values = Vec::with_capacity(rows * cols);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for band in 0..rows {
        for time in 0..cols {
            let v = ds.amplitudes[time][band];
            min = min.min(v);
            max = max.max(v);
            values.push(v);
        }
    }

    Ok(HeatmapGrid {
        cols,
        rows,
        values,
        min,
        max,
        start: ds.timestamps[0],
        end: ds.timestamps[cols - 1],
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
