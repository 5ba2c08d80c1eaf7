use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SensorScopeApp {
    pub state: AppState,
}

impl SensorScopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SensorScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and tab strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Overview => panels::overview_tab(ui, &mut self.state),
            Tab::Acoustic => panels::acoustic_tab(ui, &mut self.state),
            Tab::Levels => panels::levels_tab(ui, &mut self.state),
            Tab::Technical => panels::technical_tab(ui, &mut self.state),
        });
    }
}
