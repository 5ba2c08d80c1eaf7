use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// FrequencyBand – one acoustic spectrum column
// ---------------------------------------------------------------------------

/// One discretized slice of the acoustic spectrum. The capture tooling names
/// these columns `f<center-Hz>`, e.g. `f25`, `f31.5`, `f10000`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyBand {
    /// Original CSV header, e.g. "f31.5".
    pub column: String,
    /// Band center frequency in Hz.
    pub center_hz: f64,
}

// ---------------------------------------------------------------------------
// AcousticDataset – one row per second of spectrum + level readings
// ---------------------------------------------------------------------------

/// Parsed acoustic CSV. Columnar, sorted by timestamp, never mutated after
/// load; a reload replaces the whole value.
#[derive(Debug, Clone)]
pub struct AcousticDataset {
    /// Row timestamps, ascending.
    pub timestamps: Vec<NaiveDateTime>,
    /// Band descriptors, ascending by center frequency. Constant across all
    /// rows of a file.
    pub bands: Vec<FrequencyBand>,
    /// Row-major amplitudes in dB: `amplitudes[row][band]`.
    pub amplitudes: Vec<Vec<f64>>,
    /// Contact level sensor, one value per row.
    pub level_contact: Vec<f64>,
    /// Ambient level sensor, one value per row.
    pub level_ambient: Vec<f64>,
}

impl AcousticDataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of frequency bands per row.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// First and last timestamp, if any rows exist.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        time_range(&self.timestamps)
    }
}

// ---------------------------------------------------------------------------
// PressureDataset – four scalar channels over time
// ---------------------------------------------------------------------------

/// CSV headers of the four pressure channels, in display order.
pub const PRESSURE_COLUMNS: [&str; 4] = [
    "Total Pressure Upstream (psi)",
    "Total Pressure Downstream (psi)",
    "Static Pressure Upstream (psi)",
    "Static Pressure Downstream (psi)",
];

/// Short channel labels matching [`PRESSURE_COLUMNS`].
pub const PRESSURE_LABELS: [&str; 4] = [
    "Total upstream",
    "Total downstream",
    "Static upstream",
    "Static downstream",
];

/// Parsed pressure CSV, same immutability rules as [`AcousticDataset`].
#[derive(Debug, Clone)]
pub struct PressureDataset {
    /// Row timestamps, ascending.
    pub timestamps: Vec<NaiveDateTime>,
    /// Channel-major values in psi: `channels[i]` matches `PRESSURE_COLUMNS[i]`.
    pub channels: [Vec<f64>; 4],
}

impl PressureDataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// First and last timestamp, if any rows exist.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        time_range(&self.timestamps)
    }
}

// ---------------------------------------------------------------------------
// SensorData – everything the dashboard shows
// ---------------------------------------------------------------------------

/// Both loaded tables, held in memory for the process lifetime.
#[derive(Debug, Clone)]
pub struct SensorData {
    pub acoustic: AcousticDataset,
    pub pressure: PressureDataset,
}

fn time_range(timestamps: &[NaiveDateTime]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    Some((*timestamps.first()?, *timestamps.last()?))
}
