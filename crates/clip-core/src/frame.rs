// File: crates/clip-core/src/frame.rs
// Summary: Renderer-agnostic draw interface and a recording sink.

use crate::geometry::{Point, Segment};

/// What a draw command depicts; backends map layers to colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    ClipWindow,
    Polygon,
    Clipped,
}

/// Receives draw commands in scene coordinates (origin bottom-left).
pub trait FrameSink {
    /// Closed outline through `points`.
    fn line_loop(&mut self, layer: Layer, points: &[Point]);
    fn line(&mut self, layer: Layer, segment: Segment);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    LineLoop { layer: Layer, points: Vec<Point> },
    Line { layer: Layer, segment: Segment },
}

/// Sink that records every command, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments drawn as individual lines on `layer`.
    pub fn lines(&self, layer: Layer) -> Vec<Segment> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { layer: l, segment } if *l == layer => Some(*segment),
                _ => None,
            })
            .collect()
    }

    /// Outlines drawn on `layer`.
    pub fn loops(&self, layer: Layer) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::LineLoop { layer: l, points } if *l == layer => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl FrameSink for Frame {
    fn line_loop(&mut self, layer: Layer, points: &[Point]) {
        self.commands.push(DrawCommand::LineLoop { layer, points: points.to_vec() });
    }

    fn line(&mut self, layer: Layer, segment: Segment) {
        self.commands.push(DrawCommand::Line { layer, segment });
    }
}
