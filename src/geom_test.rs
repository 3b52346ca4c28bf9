#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Point-in-convex-quad test via consistent edge orientation.
fn quad_contains(quad: &[Point; 4], p: Point) -> bool {
    let mut sign = 0.0_f64;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross.abs() < EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_arithmetic() {
    let a = pt(3.0, 4.0);
    let b = pt(1.0, 2.0);
    assert_eq!(a + b, pt(4.0, 6.0));
    assert_eq!(a - b, pt(2.0, 2.0));
    assert_eq!(a * 0.5, pt(1.5, 2.0));
}

#[test]
fn point_length_and_distance() {
    assert_eq!(pt(3.0, 4.0).length(), 5.0);
    assert_eq!(pt(1.0, 1.0).distance(pt(4.0, 5.0)), 5.0);
}

#[test]
fn point_midpoint() {
    assert_eq!(pt(0.0, 0.0).midpoint(pt(10.0, -4.0)), pt(5.0, -2.0));
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), pt(0.0, 0.0));
}

// =============================================================
// Fold derivation
// =============================================================

#[test]
fn fold_horizontal_drag() {
    let f = fold(pt(500.0, 100.0), pt(300.0, 100.0));
    assert_eq!(f.mid, pt(400.0, 100.0));
    assert_eq!(f.dist, 200.0);
    assert!(approx_eq(f.angle, 0.0));
}

#[test]
fn fold_angle_points_from_drag_to_anchor() {
    let f = fold(pt(100.0, 0.0), pt(100.0, 50.0));
    assert!(approx_eq(f.angle, -FRAC_PI_2));

    let f = fold(pt(0.0, 0.0), pt(10.0, 0.0));
    assert!(approx_eq(f.angle.abs(), PI));
}

#[test]
fn fold_is_pure_function_of_inputs() {
    let a = fold(pt(500.0, 80.0), pt(420.0, 140.0));
    let b = fold(pt(500.0, 80.0), pt(420.0, 140.0));
    assert_eq!(a, b);
}

#[test]
fn fold_flat_below_threshold() {
    assert!(fold(pt(500.0, 100.0), pt(500.0, 100.0)).is_flat(1.0));
    assert!(fold(pt(500.0, 100.0), pt(499.4, 100.6)).is_flat(1.0));
    assert!(!fold(pt(500.0, 100.0), pt(499.0, 100.0)).is_flat(1.0));
}

#[test]
fn fold_zero_distance_is_finite() {
    let f = fold(pt(50.0, 50.0), pt(50.0, 50.0));
    assert_eq!(f.dist, 0.0);
    assert!(f.angle.is_finite());
    assert!(point_approx_eq(f.unit(), pt(1.0, 0.0)));
}

#[test]
fn fold_sides() {
    let anchor = pt(500.0, 100.0);
    let drag = pt(300.0, 160.0);
    let f = fold(anchor, drag);
    assert_eq!(f.side_of(anchor), Side::Anchor);
    assert_eq!(f.side_of(drag), Side::Drag);
    assert!(approx_eq(f.signed_distance(f.mid), 0.0));
}

// =============================================================
// Mirror
// =============================================================

#[test]
fn mirror_maps_anchor_to_drag() {
    let anchor = pt(500.0, 100.0);
    let drag = pt(320.0, 190.0);
    let m = fold(anchor, drag).mirror();
    assert!(point_approx_eq(m.apply(anchor), drag));
    assert!(point_approx_eq(m.apply(drag), anchor));
}

#[test]
fn mirror_fixes_points_on_fold_line() {
    let f = fold(pt(500.0, 100.0), pt(300.0, 40.0));
    let u = f.unit();
    let on_line = f.mid + Point::new(-u.y, u.x) * 73.0;
    assert!(point_approx_eq(f.mirror().apply(on_line), on_line));
    assert!(point_approx_eq(f.mirror().apply(f.mid), f.mid));
}

#[test]
fn mirror_is_involution() {
    let m = fold(pt(400.0, 20.0), pt(120.0, 260.0)).mirror();
    let p = pt(33.0, -71.0);
    assert!(point_approx_eq(m.apply(m.apply(p)), p));
}

#[test]
fn affine_default_is_identity() {
    let p = pt(12.5, -3.0);
    assert_eq!(Affine::default().apply(p), p);
}

// =============================================================
// Half-plane quads
// =============================================================

#[test]
fn half_plane_covers_surface_at_steep_angles() {
    let (w, h) = (500.0, 300.0);
    let surface = Rect::new(0.0, 0.0, w, h);
    let extent = w.max(h) * 4.0;
    for drag in [pt(480.0, -400.0), pt(10.0, 290.0), pt(499.0, 900.0), pt(-300.0, 150.0)] {
        let f = fold(pt(w, 150.0), drag);
        let front = half_plane(&f, Side::Anchor, extent);
        let rear = half_plane(&f, Side::Drag, extent);
        for corner in surface.corners() {
            let quad = match f.side_of(corner) {
                Side::Anchor => &front,
                Side::Drag => &rear,
            };
            assert!(quad_contains(quad, corner), "corner {corner:?} uncovered for drag {drag:?}");
        }
    }
}

#[test]
fn half_plane_sides_do_not_overlap() {
    let f = fold(pt(500.0, 100.0), pt(200.0, 100.0));
    let front = half_plane(&f, Side::Anchor, 2000.0);
    let rear = half_plane(&f, Side::Drag, 2000.0);
    assert!(front.iter().all(|p| f.signed_distance(*p) >= -EPSILON));
    assert!(rear.iter().all(|p| f.signed_distance(*p) <= EPSILON));
}

#[test]
fn rect_corners_clockwise_from_origin() {
    let r = Rect::new(1.0, 2.0, 10.0, 20.0);
    assert_eq!(r.corners(), [pt(1.0, 2.0), pt(11.0, 2.0), pt(11.0, 22.0), pt(1.0, 22.0)]);
}
