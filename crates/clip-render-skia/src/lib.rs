// File: crates/clip-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws a ClipSession frame and exports RGBA8 / PNG.

use anyhow::{Context, Result};
use clip_core::types::{HEIGHT, WIDTH};
use clip_core::{ClipSession, DemoConfig, FrameSink, Layer, Point, Segment};
use log::debug;
use skia_safe as skia;

pub mod theme;

pub use theme::Theme;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub stroke_width: f32,
    /// Off by default so lines land on whole pixels.
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::classic(),
            stroke_width: 2.0,
            anti_alias: false,
        }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &DemoConfig) -> Self {
        Self {
            width: cfg.window_width,
            height: cfg.window_height,
            theme: theme::find(&cfg.theme),
            ..Self::default()
        }
    }
}

/// Frame sink drawing onto a skia canvas. Scene y grows upward, canvas y downward.
pub struct SkiaSink<'a> {
    canvas: &'a skia::Canvas,
    height: i32,
    theme: Theme,
    paint: skia::Paint,
}

impl<'a> SkiaSink<'a> {
    pub fn new(canvas: &'a skia::Canvas, opts: &RenderOptions) -> Self {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(opts.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(opts.stroke_width);
        Self { canvas, height: opts.height, theme: opts.theme, paint }
    }

    fn to_canvas(&self, p: Point) -> skia::Point {
        skia::Point::new(p.x as f32, (self.height - p.y) as f32)
    }
}

impl FrameSink for SkiaSink<'_> {
    fn line_loop(&mut self, layer: Layer, points: &[Point]) {
        // A one-vertex loop has no edges to stroke.
        if points.len() < 2 {
            return;
        }
        self.paint.set_color(self.theme.layer_color(layer));
        for (i, &p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            self.canvas.draw_line(self.to_canvas(p), self.to_canvas(q), &self.paint);
        }
    }

    fn line(&mut self, layer: Layer, segment: Segment) {
        self.paint.set_color(self.theme.layer_color(layer));
        let a = self.to_canvas(segment.start);
        let b = self.to_canvas(segment.end);
        self.canvas.draw_line(a, b, &self.paint);
    }
}

/// Clear `canvas` to the theme background and draw the session's current frame.
pub fn draw_session(canvas: &skia::Canvas, session: &ClipSession, opts: &RenderOptions) {
    canvas.clear(opts.theme.background);
    let mut sink = SkiaSink::new(canvas, opts);
    session.render(&mut sink);
}

/// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(session: &ClipSession, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .with_context(|| format!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    draw_session(surface.canvas(), session, opts);

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back raster pixels");
    }
    Ok((pixels, opts.width as u32, opts.height as u32, stride))
}

pub fn render_to_png_bytes(session: &ClipSession, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (pixels, w, h, _) = render_to_rgba8(session, opts)?;
    let img = image::RgbaImage::from_raw(w, h, pixels).context("pixel buffer does not match surface size")?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
    Ok(out.into_inner())
}

/// Render the session to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    session: &ClipSession,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(session, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
