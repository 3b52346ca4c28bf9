#![allow(clippy::float_cmp)]

use super::*;

const EASE: f64 = 0.2;
const SNAP: f64 = 0.5;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn step_covers_ease_fraction() {
    let next = step(pt(500.0, 100.0), pt(400.0, 100.0), EASE, SNAP);
    assert!((next.x - 420.0).abs() < 1e-9);
    assert_eq!(next.y, 100.0);
}

#[test]
fn step_at_rest_is_idempotent() {
    let anchor = pt(500.0, 120.0);
    assert_eq!(step(anchor, anchor, EASE, SNAP), anchor);
}

#[test]
fn step_snaps_inside_snap_distance() {
    let anchor = pt(500.0, 120.0);
    assert_eq!(step(anchor, pt(499.6, 120.3), EASE, SNAP), anchor);
}

#[test]
fn step_does_not_snap_when_one_axis_is_far() {
    let anchor = pt(500.0, 120.0);
    let next = step(anchor, pt(499.9, 100.0), EASE, SNAP);
    assert_ne!(next, anchor);
}

#[test]
fn distance_is_non_increasing_and_reaches_zero() {
    let anchor = pt(500.0, 150.0);
    let mut drag = pt(60.0, 20.0);
    let mut last = anchor.distance(drag);
    let mut ticks = 0;
    while drag != anchor {
        drag = step(anchor, drag, EASE, SNAP);
        let d = anchor.distance(drag);
        assert!(d <= last, "distance grew from {last} to {d}");
        last = d;
        ticks += 1;
        assert!(ticks < 200, "did not converge");
    }
    for _ in 0..10 {
        assert_eq!(step(anchor, drag, EASE, SNAP), anchor);
    }
}

#[test]
fn full_ease_reaches_anchor_in_one_step() {
    let anchor = pt(10.0, 10.0);
    assert_eq!(step(anchor, pt(-400.0, 90.0), 1.0, SNAP), anchor);
}

#[test]
fn within_snap_is_strict() {
    let anchor = pt(0.0, 0.0);
    assert!(within_snap(anchor, pt(0.49, -0.49), SNAP));
    assert!(!within_snap(anchor, pt(0.5, 0.0), SNAP));
}
