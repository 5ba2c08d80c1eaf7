use serde::Serialize;

use super::model::{PRESSURE_LABELS, SensorData};

// ---------------------------------------------------------------------------
// Per-channel summary
// ---------------------------------------------------------------------------

/// Min/max/mean/count of one scalar channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

impl ChannelStats {
    /// `None` when the channel has no samples.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some(ChannelStats {
            min,
            max,
            mean: sum / values.len() as f64,
            count: values.len(),
        })
    }
}

/// A channel summary paired with its display label.
#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub channel: String,
    #[serde(flatten)]
    pub stats: ChannelStats,
}

// ---------------------------------------------------------------------------
// Technical report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AcousticSummary {
    pub records: usize,
    pub frequency_bands: usize,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
    pub level_contact: Option<ChannelStats>,
    pub level_ambient: Option<ChannelStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PressureSummary {
    pub records: usize,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
    pub channels: Vec<NamedStats>,
}

/// Everything the technical view shows; also the JSON export payload.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalReport {
    pub acoustic: AcousticSummary,
    pub pressure: PressureSummary,
}

impl TechnicalReport {
    pub fn new(data: &SensorData) -> Self {
        let acoustic_range = data.acoustic.time_range();
        let pressure_range = data.pressure.time_range();

        let channels = PRESSURE_LABELS
            .iter()
            .zip(data.pressure.channels.iter())
            .filter_map(|(&label, values)| {
                ChannelStats::from_values(values).map(|stats| NamedStats {
                    channel: label.to_string(),
                    stats,
                })
            })
            .collect();

        TechnicalReport {
            acoustic: AcousticSummary {
                records: data.acoustic.len(),
                frequency_bands: data.acoustic.band_count(),
                first_timestamp: acoustic_range.map(|(first, _)| first.to_string()),
                last_timestamp: acoustic_range.map(|(_, last)| last.to_string()),
                level_contact: ChannelStats::from_values(&data.acoustic.level_contact),
                level_ambient: ChannelStats::from_values(&data.acoustic.level_ambient),
            },
            pressure: PressureSummary {
                records: data.pressure.len(),
                first_timestamp: pressure_range.map(|(first, _)| first.to_string()),
                last_timestamp: pressure_range.map(|(_, last)| last.to_string()),
                channels,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AcousticDataset, FrequencyBand, PressureDataset};
    use chrono::NaiveDate;

    #[test]
    fn channel_stats_exact() {
        let stats = ChannelStats::from_values(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn empty_channel_has_no_stats() {
        assert_eq!(ChannelStats::from_values(&[]), None);
    }

    fn sample_data() -> SensorData {
        let t0 = NaiveDate::from_ymd_opt(2024, 3, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let t1 = t0 + chrono::TimeDelta::seconds(1);
        SensorData {
            acoustic: AcousticDataset {
                timestamps: vec![t0, t1],
                bands: vec![FrequencyBand {
                    column: "f25".into(),
                    center_hz: 25.0,
                }],
                amplitudes: vec![vec![80.0], vec![82.0]],
                level_contact: vec![10.0, 14.0],
                level_ambient: vec![20.0, 22.0],
            },
            pressure: PressureDataset {
                timestamps: vec![t0, t1],
                channels: [
                    vec![3180.0, 3182.0],
                    vec![2950.0, 2952.0],
                    vec![3120.0, 3122.0],
                    vec![2890.0, 2892.0],
                ],
            },
        }
    }

    #[test]
    fn report_covers_all_channels() {
        let report = TechnicalReport::new(&sample_data());

        assert_eq!(report.acoustic.records, 2);
        assert_eq!(report.acoustic.frequency_bands, 1);
        assert_eq!(report.acoustic.level_contact.as_ref().unwrap().mean, 12.0);
        assert_eq!(report.pressure.channels.len(), 4);
        assert_eq!(report.pressure.channels[0].channel, "Total upstream");
        assert_eq!(report.pressure.channels[1].stats.min, 2950.0);
        assert!(report.acoustic.first_timestamp.is_some());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = TechnicalReport::new(&sample_data());
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"frequency_bands\": 1"));
        assert!(json.contains("Static downstream"));
    }
}
