// tests/shape_properties.rs

use std::f64::consts::PI;

use drawing_shapes::gradient::wrap01;
use drawing_shapes::path::PathSegment;
use drawing_shapes::shapes::spirograph::THETA_STEP;
use drawing_shapes::shapes::{gcd, Arc, Checkerboard, Flower, InsettableShape, Shape, Spirograph, Trapezoid};
use drawing_shapes::{FillRule, GeometryError, Point2, Rect};

#[test]
fn checkerboard_fills_half_the_cells() {
    let bounds = Rect::from_size(160.0, 90.0);
    for rows in 0..7 {
        for columns in 0..7 {
            let path = Checkerboard::new(rows, columns).path(bounds).unwrap();
            let cells = rows * columns;
            let filled = path.subpath_count();
            if rows == 0 || columns == 0 {
                assert_eq!(filled, 0);
            } else {
                assert!(filled == cells / 2 || filled == cells.div_ceil(2), "{rows}x{columns} filled {filled}");
            }
        }
    }
}

#[test]
fn gcd_matches_the_euclidean_recurrence() {
    assert_eq!(gcd(4, 6), 2);
    assert_eq!(gcd(7, 13), 1);
    for a in 1..40i64 {
        assert_eq!(gcd(a, 0), a as u64);
        for b in 1..40i64 {
            assert_eq!(gcd(a, b), gcd(b, a % b));
        }
    }
}

#[test]
fn spirograph_is_one_connected_polyline() {
    let bounds = Rect::from_size(300.0, 300.0);
    let spirograph = Spirograph::new(100, 40, 40, 1.0);
    let path = spirograph.path(bounds).unwrap();

    assert!(!path.is_empty());
    assert_eq!(path.subpath_count(), 1);
    assert!(matches!(path.segments()[0], PathSegment::MoveTo(_)));
    assert!(path.segments()[1..].iter().all(|s| matches!(s, PathSegment::LineTo(_))));

    // difference 60, pen 40: at theta 0 the pen sits 100 right of centre.
    assert!(path.points()[0].approx_eq(&Point2::new(250.0, 150.0), 1e-9));

    let end_theta = spirograph.end_theta().unwrap();
    assert_eq!(end_theta, 13.0);
    let expected = (end_theta / THETA_STEP).floor() as usize + 1;
    assert!(path.len().abs_diff(expected) <= 1, "{} points, expected about {}", path.len(), expected);
}

#[test]
fn spirograph_rejects_zero_outer_radius() {
    let result = Spirograph::new(10, 0, 5, 1.0).path(Rect::from_size(100.0, 100.0));
    assert!(matches!(result, Err(GeometryError::DivisionByZero(_))));
}

#[test]
fn hue_wrapping() {
    assert_eq!(wrap01(0.5), 0.5);
    assert!((wrap01(1.3) - 0.3).abs() < 1e-12);
    assert!((wrap01(1.999) - 0.999).abs() < 1e-12);
}

#[test]
fn trapezoid_is_closed_with_top_edge_on_min_y() {
    let bounds = Rect::from_size(200.0, 100.0);
    let points = Trapezoid::new(50.0).path(bounds).unwrap().points();
    assert_eq!(points.len(), 5);
    assert_eq!(points.first(), points.last());
    assert_eq!(points[1].y, bounds.min_y());
    assert_eq!(points[2].y, bounds.min_y());
}

#[test]
fn flower_always_has_sixteen_even_odd_petals() {
    let bounds = Rect::from_size(300.0, 300.0);
    let mut offset = -40.0;
    while offset <= 40.0 {
        let mut width = 0.0;
        while width <= 100.0 {
            let path = Flower::new(offset, width).path(bounds).unwrap();
            assert_eq!(path.subpath_count(), 16);
            assert_eq!(path.fill_rule(), FillRule::EvenOdd);
            width += 25.0;
        }
        offset += 20.0;
    }
}

#[test]
fn arc_insets_compose_additively() {
    let bounds = Rect::from_size(240.0, 240.0);
    let arc = Arc::new(0.0, PI, true);
    let twice = arc.inset(12.5).inset(7.5);
    let once = arc.inset(20.0);
    assert_eq!(twice.radius_in(bounds), once.radius_in(bounds));
    assert_eq!(twice.path(bounds).unwrap(), once.path(bounds).unwrap());
}

#[test]
fn generators_reject_degenerate_bounds() {
    let bad = Rect::from_size(-10.0, 10.0);
    assert!(matches!(Trapezoid::new(1.0).path(bad), Err(GeometryError::DegenerateGeometry(_))));
    assert!(matches!(Checkerboard::new(2, 2).path(bad), Err(GeometryError::DegenerateGeometry(_))));
}

#[test]
fn generators_are_deterministic() {
    let bounds = Rect::from_size(320.0, 200.0);
    let flower = Flower::default();
    assert_eq!(flower.path(bounds).unwrap(), flower.path(bounds).unwrap());
    let spirograph = Spirograph::new(75, 30, 20, 0.5);
    assert_eq!(spirograph.path(bounds).unwrap(), spirograph.path(bounds).unwrap());
}
