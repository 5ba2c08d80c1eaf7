/// UI layer: egui panels and plots over the chart builders.
pub mod heatmap;
pub mod panels;
pub mod plot;
