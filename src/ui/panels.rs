use std::fs;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::heatmap::{MAX_SAMPLES, MIN_SAMPLES};
use crate::data::stats::{AcousticSummary, ChannelStats, PressureSummary, TechnicalReport};
use crate::state::{AppState, Tab};
use crate::ui::{heatmap, plot};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, tab strip and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            let has_data = state.data.is_some();
            if ui
                .add_enabled(has_data, egui::Button::new("Export report…"))
                .clicked()
            {
                if let Some(report) = state.data.as_ref().map(TechnicalReport::new) {
                    export_report(state, &report);
                }
                ui.close_menu();
            }
        });

        if ui.button("Reload").clicked() {
            state.reload();
        }

        ui.separator();

        for tab in Tab::ALL {
            if ui.selectable_label(state.tab == tab, tab.label()).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        if let Some(data) = &state.data {
            ui.label(format!(
                "{} acoustic rows · {} pressure rows",
                data.acoustic.len(),
                data.pressure.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Tab bodies
// ---------------------------------------------------------------------------

/// Overview: the four pressure channels plus a one-line capture summary.
pub fn overview_tab(ui: &mut Ui, state: &mut AppState) {
    let Some(data) = &state.data else {
        no_data_message(ui);
        return;
    };

    if let Some((first, last)) = data.acoustic.time_range() {
        ui.label(format!(
            "Acoustic capture: {} rows, {} frequency bands, {first} to {last}",
            data.acoustic.len(),
            data.acoustic.band_count(),
        ));
        ui.separator();
    }

    ui.heading("Pressure sensor readings");
    plot::pressure_grid(ui, &data.pressure);
}

/// Acoustic analysis: time-index and sample-count sliders, spectrum, heatmap.
pub fn acoustic_tab(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        data,
        time_index,
        heatmap_samples,
        revision,
        heatmap_cache,
        ..
    } = state;

    let Some(data) = data else {
        no_data_message(ui);
        return;
    };
    let max_index = data.acoustic.len().saturating_sub(1);

    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::Slider::new(time_index, 0..=max_index).text("Time index"));
        ui.separator();
        ui.add(
            egui::Slider::new(heatmap_samples, MIN_SAMPLES..=MAX_SAMPLES)
                .step_by(50.0)
                .text("Heatmap samples"),
        );
    });

    ui.separator();
    ui.heading("Frequency spectrum");
    plot::spectrum_plot(ui, &data.acoustic, *time_index);

    ui.separator();
    ui.heading("Frequency response heatmap");
    heatmap::heatmap_plot(ui, &data.acoustic, *heatmap_samples, *revision, heatmap_cache);
}

/// Level monitoring: contact and ambient line plots.
pub fn levels_tab(ui: &mut Ui, state: &mut AppState) {
    let Some(data) = &state.data else {
        no_data_message(ui);
        return;
    };

    ui.heading("Level sensor readings");
    plot::level_plots(ui, &data.acoustic);
}

/// Technical details: summary tables and the report export button.
pub fn technical_tab(ui: &mut Ui, state: &mut AppState) {
    let Some(report) = state.data.as_ref().map(TechnicalReport::new) else {
        no_data_message(ui);
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Technical details");
        if ui.button("Export report…").clicked() {
            export_report(state, &report);
        }
    });
    ui.separator();

    ui.strong("Acoustic sensor");
    acoustic_table(ui, &report.acoustic);
    ui.add_space(12.0);
    ui.strong("Pressure sensors");
    pressure_table(ui, &report.pressure);
}

fn no_data_message(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("No sensor data loaded  (File → Open data folder…)");
    });
}

// ---------------------------------------------------------------------------
// Statistics tables
// ---------------------------------------------------------------------------

fn acoustic_table(ui: &mut Ui, summary: &AcousticSummary) {
    let rows = vec![
        ("Total records", summary.records.to_string()),
        ("Frequency bands", summary.frequency_bands.to_string()),
        (
            "Time range",
            span_label(&summary.first_timestamp, &summary.last_timestamp),
        ),
        ("Level contact range", range_label(&summary.level_contact)),
        ("Level ambient range", range_label(&summary.level_ambient)),
    ];

    TableBuilder::new(ui)
        .id_salt("acoustic_stats")
        .striped(true)
        .column(Column::auto().at_least(170.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Metric");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for (metric, value) in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(metric);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}

fn pressure_table(ui: &mut Ui, summary: &PressureSummary) {
    TableBuilder::new(ui)
        .id_salt("pressure_stats")
        .striped(true)
        .column(Column::auto().at_least(170.0))
        .columns(Column::auto().at_least(90.0), 4)
        .header(20.0, |mut header| {
            for title in ["Channel", "Min (psi)", "Max (psi)", "Mean (psi)", "Samples"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for entry in &summary.channels {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&entry.channel);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", entry.stats.min));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", entry.stats.max));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.3}", entry.stats.mean));
                    });
                    row.col(|ui| {
                        ui.label(entry.stats.count.to_string());
                    });
                });
            }
        });
}

fn range_label(stats: &Option<ChannelStats>) -> String {
    match stats {
        Some(s) => format!("{:.2} to {:.2}", s.min, s.max),
        None => "–".to_string(),
    }
}

fn span_label(first: &Option<String>, last: &Option<String>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "–".to_string(),
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let Some(dir) = rfd::FileDialog::new()
        .set_title("Open sensor data folder")
        .pick_folder()
    else {
        return;
    };
    state.set_data_dir(&dir);
}

pub fn export_report(state: &mut AppState, report: &TechnicalReport) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export technical report")
        .set_file_name("sensor_report.json")
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };

    let result = serde_json::to_string_pretty(report)
        .map_err(anyhow::Error::from)
        .and_then(|json| fs::write(&path, json).map_err(anyhow::Error::from));

    match result {
        Ok(()) => {
            log::info!("report written to {}", path.display());
            state.status_message = Some(format!("Report written to {}", path.display()));
        }
        Err(e) => {
            log::error!("failed to export report: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
