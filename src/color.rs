use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sequential colormap for the heatmap
// ---------------------------------------------------------------------------

const LOOKUP_SIZE: usize = 256;

/// A gradient sampled into a lookup table, indexed by a 0..=1 value.
#[derive(Debug, Clone)]
pub struct Colormap {
    lut: Vec<Color32>,
}

impl Colormap {
    pub fn viridis() -> Self {
        Self::from_gradient(&colorgrad::viridis())
    }

    fn from_gradient(gradient: &colorgrad::Gradient) -> Self {
        let lut = (0..LOOKUP_SIZE)
            .map(|i| {
                let t = i as f64 / (LOOKUP_SIZE - 1) as f64;
                let [r, g, b, a] = gradient.at(t).to_rgba8();
                Color32::from_rgba_unmultiplied(r, g, b, a)
            })
            .collect();
        Colormap { lut }
    }

    /// Look up the colour for a normalized value, clamped to 0..=1.
    pub fn at(&self, t: f64) -> Color32 {
        let idx = (t.clamp(0.0, 1.0) * (LOOKUP_SIZE - 1) as f64).round() as usize;
        self.lut[idx]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(4).len(), 4);
    }

    #[test]
    fn colormap_clamps_out_of_range_values() {
        let cm = Colormap::viridis();
        assert_eq!(cm.at(-1.0), cm.at(0.0));
        assert_eq!(cm.at(2.0), cm.at(1.0));
        assert_ne!(cm.at(0.0), cm.at(1.0));
    }
}
