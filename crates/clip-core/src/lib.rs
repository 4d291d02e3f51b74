// File: crates/clip-core/src/lib.rs
// Summary: Core library entry point; exports the clipper, polygon session and configuration.

pub mod clip;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod outcode;
pub mod polygon;
pub mod session;
pub mod types;

pub use clip::{clip_segment, Boundary};
pub use config::DemoConfig;
pub use error::ConfigError;
pub use frame::{DrawCommand, Frame, FrameSink, Layer};
pub use geometry::{ClipBounds, ClipRectangle, Point, Segment};
pub use outcode::Outcode;
pub use polygon::{ClippedEdges, Edges, Polygon};
pub use session::{ClipSession, Command};
