// File: crates/clip-core/src/types.rs
// Summary: Shared constants (window size, default clip window, title).

use crate::geometry::ClipRectangle;

/// Default window width in pixels.
pub const WIDTH: i32 = 640;
/// Default window height in pixels.
pub const HEIGHT: i32 = 480;

/// Default window title.
pub const TITLE: &str = "Cohen-Sutherland Line Clipping for Polygon";

/// Default clip window, in scene coordinates (origin bottom-left).
pub const DEFAULT_CLIP: ClipRectangle = ClipRectangle::from_bounds_unchecked(100, 100, 400, 300);
