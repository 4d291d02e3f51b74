// File: crates/clip-core/src/polygon.rs
// Summary: Click-ordered, implicitly closed polygon and its edge-clipping pass.

use crate::clip::clip_segment;
use crate::geometry::{ClipRectangle, Point, Segment};

/// Ordered vertex list; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn from_vertices(vertices: impl IntoIterator<Item = Point>) -> Self {
        Self { vertices: vertices.into_iter().collect() }
    }

    pub fn push(&mut self, p: Point) {
        self.vertices.push(p);
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges `i -> (i + 1) % n`, closing edge included. Empty for fewer than 2 vertices.
    pub fn edges(&self) -> Edges<'_> {
        Edges { vertices: &self.vertices, next: 0 }
    }

    /// Visible parts of each edge inside `rect`, in edge order; rejected edges are skipped.
    pub fn clipped_edges<'a>(&'a self, rect: &'a ClipRectangle) -> ClippedEdges<'a> {
        ClippedEdges { edges: self.edges(), rect }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

#[derive(Clone, Debug)]
pub struct Edges<'a> {
    vertices: &'a [Point],
    next: usize,
}

impl Iterator for Edges<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let n = self.vertices.len();
        if n < 2 || self.next >= n {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.vertices.len();
        let left = if n < 2 { 0 } else { n - self.next };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Edges<'_> {}

/// Lazy edge-clipping pass over a borrowed polygon. Each call to
/// [`Polygon::clipped_edges`] starts a fresh pass.
#[derive(Clone, Debug)]
pub struct ClippedEdges<'a> {
    edges: Edges<'a>,
    rect: &'a ClipRectangle,
}

impl Iterator for ClippedEdges<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let rect = self.rect;
        self.edges.by_ref().find_map(|edge| clip_segment(rect, edge))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.edges.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_vertices_give_both_directions() {
        let poly = Polygon::from_vertices([Point::new(0, 0), Point::new(5, 5)]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges, vec![
            Segment::new(Point::new(0, 0), Point::new(5, 5)),
            Segment::new(Point::new(5, 5), Point::new(0, 0)),
        ]);
    }

    #[test]
    fn edges_len_matches_vertex_count() {
        let poly: Polygon = (0..7).map(|i| Point::new(i, i * i)).collect();
        assert_eq!(poly.edges().len(), 7);
        assert_eq!(Polygon::new().edges().len(), 0);
    }
}
