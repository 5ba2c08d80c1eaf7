use chrono::NaiveDateTime;

use super::ChartError;
use crate::data::model::AcousticDataset;

// ---------------------------------------------------------------------------
// Spectrum view
// ---------------------------------------------------------------------------

/// Frequency response of a single time sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumView {
    /// Row actually shown (the requested index, clamped to the data range).
    pub row: usize,
    pub timestamp: NaiveDateTime,
    /// (center frequency in Hz, amplitude in dB), ascending by frequency.
    pub points: Vec<[f64; 2]>,
}

/// Build the spectrum for the requested row. Indices past the end clamp to
/// the last row; an empty dataset is an explicit error, never a panic.
pub fn spectrum_at(ds: &AcousticDataset, index: usize) -> Result<SpectrumView, ChartError> {
    if ds.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let row = index.min(ds.len() - 1);
    let points = ds
        .bands
        .iter()
        .zip(ds.amplitudes[row].iter())
        .map(|(band, &amp)| [band.center_hz, amp])
        .collect();
    Ok(SpectrumView {
        row,
        timestamp: ds.timestamps[row],
        points,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FrequencyBand;
    use chrono::{NaiveDate, TimeDelta};

    fn dataset() -> AcousticDataset {
        let t0 = NaiveDate::from_ymd_opt(2024, 3, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        AcousticDataset {
            timestamps: vec![t0, t0 + TimeDelta::seconds(1)],
            bands: vec![
                FrequencyBand {
                    column: "f25".into(),
                    center_hz: 25.0,
                },
                FrequencyBand {
                    column: "f10000".into(),
                    center_hz: 10000.0,
                },
            ],
            amplitudes: vec![vec![80.0, 40.0], vec![82.0, 44.0]],
            level_contact: vec![0.0, 0.0],
            level_ambient: vec![0.0, 0.0],
        }
    }

    #[test]
    fn spectrum_pairs_bands_with_amplitudes() {
        let view = spectrum_at(&dataset(), 0).unwrap();
        assert_eq!(view.row, 0);
        assert_eq!(view.points, vec![[25.0, 80.0], [10000.0, 40.0]]);
    }

    #[test]
    fn out_of_range_index_clamps_to_last_row() {
        let view = spectrum_at(&dataset(), 999).unwrap();
        assert_eq!(view.row, 1);
        assert_eq!(view.points, vec![[25.0, 82.0], [10000.0, 44.0]]);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let ds = AcousticDataset {
            timestamps: Vec::new(),
            bands: Vec::new(),
            amplitudes: Vec::new(),
            level_contact: Vec::new(),
            level_ambient: Vec::new(),
        };
        assert_eq!(spectrum_at(&ds, 0), Err(ChartError::EmptyDataset));
    }

    #[test]
    fn spectrum_is_deterministic() {
        let ds = dataset();
        assert_eq!(spectrum_at(&ds, 1), spectrum_at(&ds, 1));
    }
}
