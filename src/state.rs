use std::path::Path;

use eframe::egui::TextureHandle;

use crate::chart::heatmap::HeatmapGrid;
use crate::data::loader::{self, LoadConfig};
use crate::data::model::SensorData;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which dashboard tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Acoustic,
    Levels,
    Technical,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Acoustic, Tab::Levels, Tab::Technical];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Acoustic => "Acoustic analysis",
            Tab::Levels => "Level monitoring",
            Tab::Technical => "Technical details",
        }
    }
}

/// Heatmap texture built for one (sample count, data revision) pair.
pub struct HeatmapCache {
    pub samples: usize,
    pub revision: u64,
    pub grid: HeatmapGrid,
    pub texture: TextureHandle,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded tables (None until a load succeeds).
    pub data: Option<SensorData>,

    /// Where to (re)load the CSVs from.
    pub config: LoadConfig,

    pub tab: Tab,

    /// Row shown in the spectrum plot.
    pub time_index: usize,

    /// Requested heatmap sample count (the chart layer clamps it).
    pub heatmap_samples: usize,

    /// Bumped on every successful load; stale cached textures compare
    /// against it.
    pub revision: u64,

    pub heatmap_cache: Option<HeatmapCache>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: LoadConfig) -> Self {
        Self {
            data: None,
            config,
            tab: Tab::Overview,
            time_index: 0,
            heatmap_samples: 100,
            revision: 0,
            heatmap_cache: None,
            status_message: None,
        }
    }

    /// Ingest freshly loaded tables and reset dependent UI state.
    pub fn set_data(&mut self, data: SensorData) {
        self.time_index = self.time_index.min(data.acoustic.len().saturating_sub(1));
        self.revision += 1;
        self.heatmap_cache = None;
        self.status_message = None;
        self.data = Some(data);
    }

    /// Re-read both CSVs from the configured paths. On failure the previous
    /// tables stay in place and the error lands in `status_message`.
    pub fn reload(&mut self) {
        match loader::load(&self.config) {
            Ok(data) => {
                log::info!(
                    "loaded {} acoustic rows ({} bands) and {} pressure rows",
                    data.acoustic.len(),
                    data.acoustic.band_count(),
                    data.pressure.len()
                );
                self.set_data(data);
            }
            Err(e) => {
                log::error!("failed to load sensor data: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Point the loader at a different data folder, keeping the configured
    /// file names, and reload.
    pub fn set_data_dir(&mut self, dir: &Path) {
        if let Some(name) = self.config.acoustic_path.file_name() {
            self.config.acoustic_path = dir.join(name);
        }
        if let Some(name) = self.config.pressure_path.file_name() {
            self.config.pressure_path = dir.join(name);
        }
        self.reload();
    }
}
