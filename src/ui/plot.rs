use chrono::{NaiveDateTime, TimeDelta};
use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::series::{TimeSeries, level_series, pressure_series};
use crate::chart::spectrum::spectrum_at;
use crate::color::generate_palette;
use crate::data::model::{AcousticDataset, PressureDataset};

// ---------------------------------------------------------------------------
// Pressure grid (overview tab)
// ---------------------------------------------------------------------------

/// Render the four pressure channels as a 2×2 grid of line plots.
pub fn pressure_grid(ui: &mut Ui, ds: &PressureDataset) {
    let series = pressure_series(ds);
    if series.is_empty() {
        ui.label("No pressure rows to plot.");
        return;
    }
    let colors = generate_palette(series.len());
    let height = (ui.available_height() * 0.5 - 24.0).max(160.0);

    let mut idx = 0;
    for pair in series.chunks(2) {
        ui.columns(2, |cols: &mut [Ui]| {
            for (col, s) in cols.iter_mut().zip(pair) {
                series_plot(col, s, colors[idx], height, "psi");
                idx += 1;
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Level plots (level monitoring tab)
// ---------------------------------------------------------------------------

/// Render level contact and ambient side by side.
pub fn level_plots(ui: &mut Ui, ds: &AcousticDataset) {
    let series = level_series(ds);
    if series.is_empty() {
        ui.label("No acoustic rows to plot.");
        return;
    }
    let colors = generate_palette(series.len());
    let height = (ui.available_height() - 24.0).max(200.0);

    ui.columns(2, |cols: &mut [Ui]| {
        for ((col, s), color) in cols.iter_mut().zip(&series).zip(colors) {
            series_plot(col, s, color, height, "level");
        }
    });
}

fn series_plot(ui: &mut Ui, series: &TimeSeries, color: Color32, height: f32, unit: &str) {
    let start = series.start;
    Plot::new(series.label)
        .height(height)
        .legend(Legend::default())
        .x_axis_formatter(move |mark, _range| clock_label(start, mark.value))
        .y_axis_label(unit)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = series.points.iter().copied().collect();
            plot_ui.line(Line::new(points).name(series.label).color(color).width(1.5));
        });
}

/// Format an elapsed-seconds axis value as wall-clock time.
fn clock_label(start: NaiveDateTime, secs: f64) -> String {
    let ts = start + TimeDelta::milliseconds((secs * 1000.0) as i64);
    ts.format("%H:%M:%S").to_string()
}

// ---------------------------------------------------------------------------
// Spectrum plot (acoustic tab)
// ---------------------------------------------------------------------------

/// Frequency spectrum of one acoustic row on a log-frequency axis.
pub fn spectrum_plot(ui: &mut Ui, ds: &AcousticDataset, time_index: usize) {
    let view = match spectrum_at(ds, time_index) {
        Ok(view) => view,
        Err(e) => {
            ui.label(format!("Spectrum unavailable: {e}"));
            return;
        }
    };

    ui.label(format!(
        "Row {} – {}",
        view.row,
        view.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    // Plot against log10(frequency); the axis formatter restores Hz labels.
    let points: PlotPoints = view
        .points
        .iter()
        .map(|&[hz, amp]| [hz.log10(), amp])
        .collect();

    Plot::new("spectrum_plot")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| format!("{:.0} Hz", 10f64.powf(mark.value)))
        .y_axis_label("Amplitude (dB)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Frequency response")
                    .color(Color32::from_rgb(148, 103, 189))
                    .width(2.0),
            );
        });
}
