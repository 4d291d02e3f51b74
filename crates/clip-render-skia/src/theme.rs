// File: crates/clip-render-skia/src/theme.rs
// Summary: Colour themes for the clipping scene.

use clip_core::Layer;
use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub clip_window: skia::Color,
    pub polygon: skia::Color,
    pub clipped: skia::Color,
}

impl Theme {
    /// White canvas, green window, red polygon, blue clipped edges.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            clip_window: skia::Color::from_argb(255, 0, 255, 0),
            polygon: skia::Color::from_argb(255, 255, 0, 0),
            clipped: skia::Color::from_argb(255, 0, 0, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            clip_window: skia::Color::from_argb(255, 40, 200, 120),
            polygon: skia::Color::from_argb(255, 220, 80, 80),
            clipped: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn layer_color(&self, layer: Layer) -> skia::Color {
        match layer {
            Layer::ClipWindow => self.clip_window,
            Layer::Polygon => self.polygon,
            Layer::Clipped => self.clipped,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
