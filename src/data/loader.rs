use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use thiserror::Error;

use super::model::{
    AcousticDataset, FrequencyBand, PRESSURE_COLUMNS, PressureDataset, SensorData,
};

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Structural problems with an input file's header row.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("no frequency band columns found (expected headers like 'f25')")]
    NoFrequencyBands,
}

// ---------------------------------------------------------------------------
// Load configuration
// ---------------------------------------------------------------------------

/// Where the CSVs live and how many acoustic rows to read.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub acoustic_path: PathBuf,
    pub pressure_path: PathBuf,
    /// Upper bound on acoustic rows read; keeps the heatmap and the time
    /// slider responsive on multi-hour captures.
    pub acoustic_row_cap: usize,
}

/// Load both sensor tables. One-shot local reads, no retry.
pub fn load(config: &LoadConfig) -> Result<SensorData> {
    let acoustic = load_acoustic(&config.acoustic_path, Some(config.acoustic_row_cap))
        .with_context(|| {
            format!(
                "loading acoustic data from {}",
                config.acoustic_path.display()
            )
        })?;
    let pressure = load_pressure(&config.pressure_path).with_context(|| {
        format!(
            "loading pressure data from {}",
            config.pressure_path.display()
        )
    })?;
    Ok(SensorData { acoustic, pressure })
}

// ---------------------------------------------------------------------------
// Acoustic loader
// ---------------------------------------------------------------------------

/// Acoustic CSV layout: header row with `receipt_time`, `f<Hz>` band columns
/// and the `level_contact` / `level_ambient` scalars. Band columns are
/// discovered from the header, so 27- and 31-band sensor variants both load.
/// Rows are sorted by timestamp after parsing.
pub fn load_acoustic(path: &Path, row_cap: Option<usize>) -> Result<AcousticDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let time_idx = require_column(&headers, "receipt_time")?;
    let contact_idx = require_column(&headers, "level_contact")?;
    let ambient_idx = require_column(&headers, "level_ambient")?;

    let mut band_cols: Vec<(usize, FrequencyBand)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| {
            let center_hz = h.strip_prefix('f')?.parse::<f64>().ok()?;
            Some((
                idx,
                FrequencyBand {
                    column: h.clone(),
                    center_hz,
                },
            ))
        })
        .collect();
    if band_cols.is_empty() {
        return Err(SchemaError::NoFrequencyBands.into());
    }
    band_cols.sort_by(|a, b| a.1.center_hz.total_cmp(&b.1.center_hz));

    struct Row {
        timestamp: NaiveDateTime,
        amplitudes: Vec<f64>,
        contact: f64,
        ambient: f64,
    }

    let mut rows: Vec<Row> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        if let Some(cap) = row_cap {
            if rows.len() >= cap {
                break;
            }
        }
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let timestamp = parse_timestamp(record.get(time_idx).unwrap_or(""))
            .with_context(|| format!("row {row_no}, column 'receipt_time'"))?;
        let amplitudes = band_cols
            .iter()
            .map(|(idx, band)| parse_float(record.get(*idx).unwrap_or(""), row_no, &band.column))
            .collect::<Result<Vec<f64>>>()?;
        let contact = parse_float(record.get(contact_idx).unwrap_or(""), row_no, "level_contact")?;
        let ambient = parse_float(record.get(ambient_idx).unwrap_or(""), row_no, "level_ambient")?;

        rows.push(Row {
            timestamp,
            amplitudes,
            contact,
            ambient,
        });
    }

    rows.sort_by_key(|r| r.timestamp);

    let bands: Vec<FrequencyBand> = band_cols.into_iter().map(|(_, band)| band).collect();
    let mut dataset = AcousticDataset {
        timestamps: Vec::with_capacity(rows.len()),
        bands,
        amplitudes: Vec::with_capacity(rows.len()),
        level_contact: Vec::with_capacity(rows.len()),
        level_ambient: Vec::with_capacity(rows.len()),
    };
    for row in rows {
        dataset.timestamps.push(row.timestamp);
        dataset.amplitudes.push(row.amplitudes);
        dataset.level_contact.push(row.contact);
        dataset.level_ambient.push(row.ambient);
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Pressure loader
// ---------------------------------------------------------------------------

/// Pressure CSV layout: header row with `Receipt_time` and the four channel
/// columns named in [`PRESSURE_COLUMNS`]. Rows are sorted by timestamp.
pub fn load_pressure(path: &Path) -> Result<PressureDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let time_idx = require_column(&headers, "Receipt_time")?;
    let mut channel_idx = [0usize; 4];
    for (slot, column) in channel_idx.iter_mut().zip(PRESSURE_COLUMNS) {
        *slot = require_column(&headers, column)?;
    }

    struct Row {
        timestamp: NaiveDateTime,
        values: [f64; 4],
    }

    let mut rows: Vec<Row> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let timestamp = parse_timestamp(record.get(time_idx).unwrap_or(""))
            .with_context(|| format!("row {row_no}, column 'Receipt_time'"))?;
        let mut values = [0.0f64; 4];
        for (slot, (idx, column)) in values
            .iter_mut()
            .zip(channel_idx.iter().zip(PRESSURE_COLUMNS))
        {
            *slot = parse_float(record.get(*idx).unwrap_or(""), row_no, column)?;
        }

        rows.push(Row { timestamp, values });
    }

    rows.sort_by_key(|r| r.timestamp);

    let mut dataset = PressureDataset {
        timestamps: Vec::with_capacity(rows.len()),
        channels: Default::default(),
    };
    for row in rows {
        dataset.timestamps.push(row.timestamp);
        for (channel, value) in dataset.channels.iter_mut().zip(row.values) {
            channel.push(value);
        }
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

fn require_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()).into())
}

fn parse_float(s: &str, row: usize, col: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("row {row}, column '{col}': '{s}' is not a number"))
}

/// Accepts the timestamp shapes the capture tooling emits: space- or
/// `T`-separated local timestamps with optional fractional seconds, and
/// RFC 3339 with an offset.
fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_utc());
    }
    bail!("'{s}' is not a recognized timestamp")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const ACOUSTIC_CSV: &str = "\
receipt_time,f25,f31.5,f10000,level_contact,level_ambient
2024-03-18 09:00:01,1.0,2.0,3.0,10.0,20.0
2024-03-18 09:00:00,4.0,5.0,6.0,11.0,21.0
2024-03-18 09:00:02,7.0,8.0,9.0,12.0,22.0
";

    #[test]
    fn acoustic_loads_and_sorts_by_timestamp() {
        let file = write_csv(ACOUSTIC_CSV);
        let ds = load_acoustic(file.path(), None).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.band_count(), 3);
        assert!(ds.timestamps.windows(2).all(|w| w[0] <= w[1]));

        // The 09:00:00 row sorts first, with its own amplitudes and levels.
        assert_eq!(ds.amplitudes[0], vec![4.0, 5.0, 6.0]);
        assert_eq!(ds.level_contact[0], 11.0);
        assert_eq!(ds.level_ambient[0], 21.0);
    }

    #[test]
    fn acoustic_bands_sorted_by_center_frequency() {
        let file = write_csv(
            "receipt_time,f10000,f25,f31.5,level_contact,level_ambient\n\
             2024-03-18 09:00:00,3.0,1.0,2.0,10.0,20.0\n",
        );
        let ds = load_acoustic(file.path(), None).unwrap();

        let centers: Vec<f64> = ds.bands.iter().map(|b| b.center_hz).collect();
        assert_eq!(centers, vec![25.0, 31.5, 10000.0]);
        // Amplitudes follow the sorted band order, not the header order.
        assert_eq!(ds.amplitudes[0], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn acoustic_row_cap_truncates() {
        let file = write_csv(ACOUSTIC_CSV);
        let ds = load_acoustic(file.path(), Some(2)).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn acoustic_missing_level_column_fails() {
        let file = write_csv(
            "receipt_time,f25,level_ambient\n\
             2024-03-18 09:00:00,1.0,20.0\n",
        );
        let err = load_acoustic(file.path(), None).unwrap_err();
        assert!(err.to_string().contains("level_contact"));
    }

    #[test]
    fn acoustic_without_band_columns_fails() {
        let file = write_csv(
            "receipt_time,level_contact,level_ambient\n\
             2024-03-18 09:00:00,10.0,20.0\n",
        );
        let err = load_acoustic(file.path(), None).unwrap_err();
        assert!(err.to_string().contains("frequency band"));
    }

    #[test]
    fn acoustic_bad_cell_reports_row_and_column() {
        let file = write_csv(
            "receipt_time,f25,level_contact,level_ambient\n\
             2024-03-18 09:00:00,oops,10.0,20.0\n",
        );
        let err = load_acoustic(file.path(), None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 0"), "unexpected error: {msg}");
        assert!(msg.contains("f25"), "unexpected error: {msg}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_acoustic(Path::new("/no/such/file.csv"), None).unwrap_err();
        assert!(format!("{err:#}").contains("opening CSV"));
    }

    const PRESSURE_CSV: &str = "\
Receipt_time,Total Pressure Upstream (psi),Total Pressure Downstream (psi),Static Pressure Upstream (psi),Static Pressure Downstream (psi)
2024-03-18 09:00:01,3180.5,2950.25,3120.0,2890.75
2024-03-18 09:00:00,3181.0,2951.0,3121.0,2891.0
";

    #[test]
    fn pressure_loads_all_channels() {
        let file = write_csv(PRESSURE_CSV);
        let ds = load_pressure(file.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert!(ds.timestamps.windows(2).all(|w| w[0] <= w[1]));
        // Sorted: the 09:00:00 row comes first.
        assert_eq!(ds.channels[0][0], 3181.0);
        assert_eq!(ds.channels[3][1], 2890.75);
    }

    #[test]
    fn pressure_missing_channel_fails() {
        let file = write_csv(
            "Receipt_time,Total Pressure Upstream (psi)\n\
             2024-03-18 09:00:00,3180.5\n",
        );
        let err = load_pressure(file.path()).unwrap_err();
        assert!(err.to_string().contains("Total Pressure Downstream (psi)"));
    }

    #[test]
    fn timestamp_formats_accepted() {
        assert!(parse_timestamp("2024-03-18 09:00:00").is_ok());
        assert!(parse_timestamp("2024-03-18 09:00:00.250").is_ok());
        assert!(parse_timestamp("2024-03-18T09:00:00").is_ok());
        assert!(parse_timestamp("2024-03-18T09:00:00+02:00").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }
}
