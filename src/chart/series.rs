use chrono::NaiveDateTime;

use crate::data::model::{AcousticDataset, PRESSURE_LABELS, PressureDataset};

// ---------------------------------------------------------------------------
// Time series extraction
// ---------------------------------------------------------------------------

/// One plottable channel. Points are (seconds since `start`, value).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub label: &'static str,
    /// Timestamp at x = 0.
    pub start: NaiveDateTime,
    pub points: Vec<[f64; 2]>,
}

/// The four pressure channels against elapsed time. Empty when the dataset
/// has no rows.
pub fn pressure_series(ds: &PressureDataset) -> Vec<TimeSeries> {
    let Some(&start) = ds.timestamps.first() else {
        return Vec::new();
    };
    PRESSURE_LABELS
        .iter()
        .zip(ds.channels.iter())
        .map(|(&label, values)| TimeSeries {
            label,
            start,
            points: to_points(&ds.timestamps, values, start),
        })
        .collect()
}

/// Level contact and ambient against elapsed time.
pub fn level_series(ds: &AcousticDataset) -> Vec<TimeSeries> {
    let Some(&start) = ds.timestamps.first() else {
        return Vec::new();
    };
    [
        ("Level contact", &ds.level_contact),
        ("Level ambient", &ds.level_ambient),
    ]
    .into_iter()
    .map(|(label, values)| TimeSeries {
        label,
        start,
        points: to_points(&ds.timestamps, values, start),
    })
    .collect()
}

fn to_points(timestamps: &[NaiveDateTime], values: &[f64], start: NaiveDateTime) -> Vec<[f64; 2]> {
    timestamps
        .iter()
        .zip(values.iter())
        .map(|(&ts, &v)| [(ts - start).num_milliseconds() as f64 / 1000.0, v])
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FrequencyBand;
    use chrono::{NaiveDate, TimeDelta};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn pressure() -> PressureDataset {
        PressureDataset {
            timestamps: vec![t0(), t0() + TimeDelta::seconds(2)],
            channels: [
                vec![1.0, 2.0],
                vec![3.0, 4.0],
                vec![5.0, 6.0],
                vec![7.0, 8.0],
            ],
        }
    }

    #[test]
    fn pressure_series_has_four_labeled_channels() {
        let series = pressure_series(&pressure());

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].label, "Total upstream");
        assert_eq!(series[0].points, vec![[0.0, 1.0], [2.0, 2.0]]);
        assert_eq!(series[3].points, vec![[0.0, 7.0], [2.0, 8.0]]);
    }

    #[test]
    fn empty_pressure_dataset_yields_no_series() {
        let ds = PressureDataset {
            timestamps: Vec::new(),
            channels: Default::default(),
        };
        assert!(pressure_series(&ds).is_empty());
    }

    #[test]
    fn level_series_tracks_both_sensors() {
        let ds = AcousticDataset {
            timestamps: vec![t0(), t0() + TimeDelta::seconds(1)],
            bands: vec![FrequencyBand {
                column: "f25".into(),
                center_hz: 25.0,
            }],
            amplitudes: vec![vec![0.0], vec![0.0]],
            level_contact: vec![10.0, 11.0],
            level_ambient: vec![20.0, 21.0],
        };
        let series = level_series(&ds);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Level contact");
        assert_eq!(series[1].points, vec![[0.0, 20.0], [1.0, 21.0]]);
    }

    #[test]
    fn series_extraction_is_deterministic() {
        let ds = pressure();
        assert_eq!(pressure_series(&ds), pressure_series(&ds));
    }
}
