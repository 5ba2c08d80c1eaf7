use eframe::egui::{Color32, ColorImage, TextureOptions, Ui, Vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::chart::heatmap::{HeatmapGrid, heatmap_grid};
use crate::color::Colormap;
use crate::data::model::AcousticDataset;
use crate::state::HeatmapCache;

// ---------------------------------------------------------------------------
// Heatmap rendering
// ---------------------------------------------------------------------------

/// Render the frequency/time heatmap, rebuilding the texture only when the
/// sample count or the loaded data changes.
pub fn heatmap_plot(
    ui: &mut Ui,
    ds: &AcousticDataset,
    samples: usize,
    revision: u64,
    cache: &mut Option<HeatmapCache>,
) {
    let stale = match cache {
        Some(c) => c.samples != samples || c.revision != revision,
        None => true,
    };

    if stale {
        match heatmap_grid(ds, samples) {
            Ok(grid) => {
                let image = grid_to_image(&grid, &Colormap::viridis());
                let texture =
                    ui.ctx()
                        .load_texture("acoustic_heatmap", image, TextureOptions::NEAREST);
                *cache = Some(HeatmapCache {
                    samples,
                    revision,
                    grid,
                    texture,
                });
            }
            Err(e) => {
                *cache = None;
                ui.label(format!("Heatmap unavailable: {e}"));
                return;
            }
        }
    }

    let Some(cache) = cache else { return };
    let grid = &cache.grid;

    ui.label(format!(
        "{} samples × {} bands, {:.1} to {:.1} dB, {} to {}",
        grid.cols,
        grid.rows,
        grid.min,
        grid.max,
        grid.start.format("%H:%M:%S"),
        grid.end.format("%H:%M:%S"),
    ));

    let size = Vec2::new(grid.cols as f32, grid.rows as f32);
    let center = PlotPoint::new(grid.cols as f64 / 2.0, grid.rows as f64 / 2.0);
    let image = PlotImage::new(&cache.texture, center, size);

    Plot::new("acoustic_heatmap_plot")
        .height(360.0)
        .x_axis_label("Sample (time)")
        .y_axis_label("Band index")
        .show(ui, |plot_ui| {
            plot_ui.image(image);
        });
}

/// Map the grid through the colormap. Band 0 (lowest frequency) lands at the
/// bottom of the image.
fn grid_to_image(grid: &HeatmapGrid, colormap: &Colormap) -> ColorImage {
    let mut image = ColorImage::new([grid.cols, grid.rows], Color32::BLACK);
    for band in 0..grid.rows {
        let flipped = grid.rows - 1 - band;
        for time in 0..grid.cols {
            image[(time, flipped)] = colormap.at(grid.normalized(band, time));
        }
    }
    image
}
