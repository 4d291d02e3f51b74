// File: crates/clip-core/tests/polygon.rs
// Purpose: Edge enumeration and the lazy edge-clipping pass.

use clip_core::{ClipRectangle, Point, Polygon, Segment};

fn rect() -> ClipRectangle {
    ClipRectangle::new(100, 100, 400, 300).expect("valid rect")
}

fn triangle() -> Polygon {
    Polygon::from_vertices([Point::new(50, 50), Point::new(450, 50), Point::new(250, 350)])
}

#[test]
fn closing_edge_is_last() {
    let edges: Vec<Segment> = triangle().edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2], Segment::new(Point::new(250, 350), Point::new(50, 50)));
}

#[test]
fn triangle_edges_are_clipped_independently() {
    let poly = triangle();
    let r = rect();
    let visible: Vec<Segment> = poly.clipped_edges(&r).collect();
    // The base (y = 50) lies below the window and is dropped.
    assert_eq!(visible, vec![
        Segment::new(Point::new(400, 125), Point::new(283, 300)),
        Segment::new(Point::new(217, 300), Point::new(100, 125)),
    ]);
    // Matches clipping each edge on its own.
    let each: Vec<Segment> = poly.edges().filter_map(|e| r.clip(e)).collect();
    assert_eq!(visible, each);
}

#[test]
fn pass_is_restartable() {
    let poly = triangle();
    let r = rect();
    let first: Vec<_> = poly.clipped_edges(&r).collect();
    let second: Vec<_> = poly.clipped_edges(&r).collect();
    assert_eq!(first, second);
}

#[test]
fn fewer_than_two_vertices_give_nothing() {
    let r = rect();
    assert_eq!(Polygon::new().clipped_edges(&r).count(), 0);
    let single = Polygon::from_vertices([Point::new(200, 200)]);
    assert_eq!(single.edges().count(), 0);
    assert_eq!(single.clipped_edges(&r).count(), 0);
}

#[test]
fn polygon_inside_window_is_drawn_whole() {
    let square = Polygon::from_vertices([
        Point::new(150, 150),
        Point::new(350, 150),
        Point::new(350, 250),
        Point::new(150, 250),
    ]);
    let r = rect();
    let visible: Vec<_> = square.clipped_edges(&r).collect();
    let edges: Vec<_> = square.edges().collect();
    assert_eq!(visible, edges);
}

#[test]
fn repeated_vertex_edge_is_skipped() {
    let poly = Polygon::from_vertices([Point::new(200, 200), Point::new(200, 200), Point::new(300, 250)]);
    let visible: Vec<_> = poly.clipped_edges(&rect()).collect();
    assert_eq!(visible.len(), 2);
}
