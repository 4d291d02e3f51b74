// File: crates/clip-core/src/session.rs
// Summary: Interactive session state (polygon, clip flag, clip window) and its event handlers.

use log::debug;

use crate::frame::{FrameSink, Layer};
use crate::geometry::{ClipRectangle, Point};
use crate::polygon::{ClippedEdges, Polygon};

/// User command recognised from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the polygon clipped to the window.
    Clip,
    /// Drop every vertex and show the raw (empty) polygon again.
    Reset,
}

impl Command {
    /// 'c'/'C' clips, 'r'/'R' resets; anything else is not a command.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'c' => Some(Self::Clip),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }
}

/// All mutable state of one demo run. Input handlers mutate it; `render` only reads.
#[derive(Clone, Debug)]
pub struct ClipSession {
    rect: ClipRectangle,
    window_height: i32,
    polygon: Polygon,
    clipping: bool,
}

impl ClipSession {
    /// `window_height` is used to flip raw click coordinates (origin top-left).
    pub fn new(rect: ClipRectangle, window_height: i32) -> Self {
        Self { rect, window_height, polygon: Polygon::new(), clipping: false }
    }

    pub fn rect(&self) -> &ClipRectangle { &self.rect }
    pub fn polygon(&self) -> &Polygon { &self.polygon }
    pub fn is_clipping(&self) -> bool { self.clipping }
    pub fn window_height(&self) -> i32 { self.window_height }

    /// Raw window coordinates to scene coordinates (origin bottom-left).
    pub fn to_scene(&self, x: i32, y: i32) -> Point {
        Point::new(x, self.window_height - y)
    }

    /// Append the clicked position as a vertex; returns the scene point added.
    pub fn handle_click(&mut self, x: i32, y: i32) -> Point {
        let p = self.to_scene(x, y);
        self.polygon.push(p);
        debug!("vertex #{} at ({}, {})", self.polygon.len(), p.x, p.y);
        p
    }

    /// Apply the command bound to `key`, if any, and return it.
    pub fn handle_key(&mut self, key: char) -> Option<Command> {
        let cmd = Command::from_key(key)?;
        self.handle_command(cmd);
        Some(cmd)
    }

    pub fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Clip => {
                self.clipping = true;
                debug!("clip requested for {} vertices", self.polygon.len());
            }
            Command::Reset => {
                self.polygon.clear();
                self.clipping = false;
                debug!("reset");
            }
        }
    }

    /// Fresh edge-clipping pass over the current polygon.
    pub fn visible_segments(&self) -> ClippedEdges<'_> {
        self.polygon.clipped_edges(&self.rect)
    }

    /// Emit the scene: window outline, then either the raw polygon outline or its clipped edges.
    pub fn render(&self, sink: &mut dyn FrameSink) {
        sink.line_loop(Layer::ClipWindow, &self.rect.corners());
        if !self.clipping {
            if !self.polygon.is_empty() {
                sink.line_loop(Layer::Polygon, self.polygon.vertices());
            }
            return;
        }
        for segment in self.visible_segments() {
            sink.line(Layer::Clipped, segment);
        }
    }
}

impl Default for ClipSession {
    fn default() -> Self {
        Self::new(ClipRectangle::default(), crate::types::HEIGHT)
    }
}
