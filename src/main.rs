mod app;
mod args;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use app::SensorScopeApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let cli = args::ScopeArgs::parse();
    let mut state = AppState::new(cli.load_config());
    state.reload();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SensorScope – Acoustic Sensor Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SensorScopeApp::new(state)))),
    )
}
