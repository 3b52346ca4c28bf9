//! Surface-space geometry: points, the fold line, and the transforms derived from it.
//!
//! Everything here is a pure function of its inputs. The fold is recomputed
//! from `(anchor, drag)` every frame and never cached.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Mul, Sub};

/// A point (or vector) in surface-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Euclidean length of this point taken as a vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle in surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}

/// Which side of the fold line a region lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The half-plane containing the anchor: the unpeeled front face.
    Anchor,
    /// The complementary half-plane containing the drag point: the folded rear face.
    Drag,
}

/// Fold line parameters derived from an anchor/drag pair.
///
/// The fold line passes through `mid` perpendicular to the drag vector.
/// `angle` is the direction from the drag point toward the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fold {
    pub mid: Point,
    pub angle: f64,
    pub dist: f64,
}

/// Derive the fold line for the current anchor and drag points.
#[must_use]
pub fn fold(anchor: Point, drag: Point) -> Fold {
    let d = anchor - drag;
    Fold {
        mid: anchor.midpoint(drag),
        angle: d.y.atan2(d.x),
        dist: d.x.hypot(d.y),
    }
}

impl Fold {
    /// Whether the fold is too short to draw as two faces.
    #[must_use]
    pub fn is_flat(&self, flat_px: f64) -> bool {
        self.dist < flat_px
    }

    /// Unit vector pointing from the drag side toward the anchor side.
    #[must_use]
    pub fn unit(&self) -> Point {
        Point::new(self.angle.cos(), self.angle.sin())
    }

    /// Signed distance of `p` from the fold line; positive on the anchor side.
    #[must_use]
    pub fn signed_distance(&self, p: Point) -> f64 {
        (p - self.mid).dot(self.unit())
    }

    #[must_use]
    pub fn side_of(&self, p: Point) -> Side {
        if self.signed_distance(p) >= 0.0 { Side::Anchor } else { Side::Drag }
    }

    /// Reflection across the fold line.
    ///
    /// Maps the anchor onto the drag point and leaves points on the line fixed.
    #[must_use]
    pub fn mirror(&self) -> Affine {
        let u = self.unit();
        let k = 2.0 * self.mid.dot(u);
        let cross = -2.0 * u.x * u.y;
        Affine {
            a: 2.0f64.mul_add(-u.x * u.x, 1.0),
            b: cross,
            c: cross,
            d: 2.0f64.mul_add(-u.y * u.y, 1.0),
            e: k * u.x,
            f: k * u.y,
        }
    }
}

/// 2D affine transform in canvas order: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }
}

impl Affine {
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a.mul_add(p.x, self.c.mul_add(p.y, self.e)),
            self.b.mul_add(p.x, self.d.mul_add(p.y, self.f)),
        )
    }
}

/// Quad covering the half-plane on `side` of the fold, out to `extent` pixels
/// from the fold midpoint in every direction.
///
/// `extent` must exceed the distance from `fold.mid` to every point that has
/// to be covered; otherwise steep folds leave corners uncovered.
#[must_use]
pub fn half_plane(fold: &Fold, side: Side, extent: f64) -> [Point; 4] {
    let u = match side {
        Side::Anchor => fold.unit(),
        Side::Drag => fold.unit() * -1.0,
    };
    let along = Point::new(-u.y, u.x) * extent;
    let out = u * extent;
    [
        fold.mid + along,
        fold.mid + along + out,
        fold.mid - along + out,
        fold.mid - along,
    ]
}
