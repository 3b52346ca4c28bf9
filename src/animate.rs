//! Return-to-rest easing for the drag point.
//!
//! Each tick covers a fixed fraction of the remaining distance (exponential
//! decay), then snaps exactly onto the anchor once both axes are within the
//! snap distance, so a released sticker always comes fully to rest.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use crate::geom::Point;

/// Whether `drag` is within `snap_px` of `anchor` on both axes.
#[must_use]
pub fn within_snap(anchor: Point, drag: Point, snap_px: f64) -> bool {
    (anchor.x - drag.x).abs() < snap_px && (anchor.y - drag.y).abs() < snap_px
}

/// Advance `drag` one tick toward `anchor`.
///
/// The distance to the anchor never grows, and a point already on the anchor
/// stays there.
#[must_use]
pub fn step(anchor: Point, drag: Point, ease: f64, snap_px: f64) -> Point {
    let next = drag + (anchor - drag) * ease;
    if within_snap(anchor, next, snap_px) { anchor } else { next }
}
