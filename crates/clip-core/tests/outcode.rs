// File: crates/clip-core/tests/outcode.rs
// Purpose: Region code classification against the default clip window.

use clip_core::{ClipRectangle, Outcode, Point};

fn rect() -> ClipRectangle {
    ClipRectangle::new(100, 100, 400, 300).expect("valid rect")
}

#[test]
fn strictly_inside_points_are_inside() {
    let r = rect();
    for x in (101..400).step_by(37) {
        for y in (101..300).step_by(23) {
            assert!(Outcode::of(Point::new(x, y), &r).is_inside(), "({x}, {y})");
        }
    }
}

#[test]
fn boundary_is_inclusive() {
    let r = rect();
    for p in r.corners() {
        assert_eq!(Outcode::of(p, &r), Outcode::INSIDE);
    }
    assert!(Outcode::of(Point::new(250, 300), &r).is_inside());
    assert!(Outcode::of(Point::new(100, 200), &r).is_inside());
}

#[test]
fn each_bound_sets_its_bit() {
    let r = rect();
    assert_eq!(Outcode::of(Point::new(99, 200), &r), Outcode::LEFT);
    assert_eq!(Outcode::of(Point::new(401, 200), &r), Outcode::RIGHT);
    assert_eq!(Outcode::of(Point::new(250, 99), &r), Outcode::BOTTOM);
    assert_eq!(Outcode::of(Point::new(250, 301), &r), Outcode::TOP);
    assert_eq!(Outcode::of(Point::new(0, 0), &r), Outcode::LEFT | Outcode::BOTTOM);
    assert_eq!(Outcode::of(Point::new(500, 400), &r), Outcode::RIGHT | Outcode::TOP);
    assert_eq!(Outcode::of(Point::new(0, 0), &r).bits(), 0b0101);
}

#[test]
fn opposite_bits_never_both_set() {
    let r = rect();
    for x in (-200..700).step_by(50) {
        for y in (-200..600).step_by(50) {
            let code = Outcode::of(Point::new(x, y), &r);
            assert!(!(code.contains(Outcode::LEFT) && code.contains(Outcode::RIGHT)));
            assert!(!(code.contains(Outcode::TOP) && code.contains(Outcode::BOTTOM)));
            assert_eq!(code.contains(Outcode::LEFT), x < 100);
            assert_eq!(code.contains(Outcode::RIGHT), x > 400);
            assert_eq!(code.contains(Outcode::BOTTOM), y < 100);
            assert_eq!(code.contains(Outcode::TOP), y > 300);
        }
    }
}

#[test]
fn degenerate_rectangle_is_a_point() {
    let r = ClipRectangle::new(5, 5, 5, 5).expect("zero-area rect is allowed");
    assert!(Outcode::of(Point::new(5, 5), &r).is_inside());
    assert_eq!(Outcode::of(Point::new(6, 4), &r), Outcode::RIGHT | Outcode::BOTTOM);
}
