// Command line argument parser using clap for sensorscope

use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::LoadConfig;

#[derive(Debug, Parser, Clone)]
#[clap(version, about)]
pub struct ScopeArgs {
    /// Directory containing the sensor CSV files
    #[arg(short = 'd', long = "data-dir", default_value = "data")]
    pub data_dir: PathBuf,

    /// Acoustic CSV file name inside the data directory
    #[arg(long = "acoustic", default_value = "AC01-1400057.csv")]
    pub acoustic: String,

    /// Pressure CSV file name inside the data directory
    #[arg(long = "pressure", default_value = "pressures.csv")]
    pub pressure: String,

    /// Maximum number of acoustic rows to load
    #[arg(long = "row-cap", default_value_t = 1000)]
    pub row_cap: usize,
}

impl ScopeArgs {
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig {
            acoustic_path: self.data_dir.join(&self.acoustic),
            pressure_path: self.data_dir.join(&self.pressure),
            acoustic_row_cap: self.row_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_data_directory() {
        let args = ScopeArgs::parse_from(["sensorscope"]);
        let config = args.load_config();

        assert_eq!(config.acoustic_path, PathBuf::from("data/AC01-1400057.csv"));
        assert_eq!(config.pressure_path, PathBuf::from("data/pressures.csv"));
        assert_eq!(config.acoustic_row_cap, 1000);
    }

    #[test]
    fn overrides_are_honored() {
        let args = ScopeArgs::parse_from([
            "sensorscope",
            "--data-dir",
            "/tmp/capture",
            "--acoustic",
            "ac.csv",
            "--row-cap",
            "50",
        ]);
        let config = args.load_config();

        assert_eq!(config.acoustic_path, PathBuf::from("/tmp/capture/ac.csv"));
        assert_eq!(config.acoustic_row_cap, 50);
    }
}
