//! Frame composition: turns peel state into an ordered list of paint operations.
//!
//! A frame is plain data. [`compose`] decides *what* is drawn (front face,
//! then rear face, then the idle hint) and [`crate::render`] replays the list
//! on a 2D context. Every `PushClip`/`PushTransform` is closed by a `Pop`
//! within the same frame.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use crate::config::StickerConfig;
use crate::consts;
use crate::geom::{self, Affine, Point, Rect, Side};
use crate::input::Phase;
use crate::peel::PeelState;

/// One gradient color stop. `offset` is in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: String,
}

/// Linear gradient between two points in the current coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(String),
    Linear(LinearGradient),
}

/// Drop shadow in surface pixels. Canvas shadows ignore the current transform,
/// so the renderer applies [`Shadow::scaled`] before setting them.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset: Point,
}

impl Shadow {
    /// The shadow with blur and offset scaled into device pixels.
    #[must_use]
    pub fn scaled(&self, dpr: f64) -> Self {
        Self { color: self.color.clone(), blur: self.blur * dpr, offset: self.offset * dpr }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Erase the given area.
    Clear(Rect),
    /// Intersect the clip with a convex quad given in surface space.
    PushClip([Point; 4]),
    /// Multiply the current transform.
    PushTransform(Affine),
    /// Draw the sticker artwork scaled into `Rect`.
    DrawImage(Rect),
    FillRect { rect: Rect, fill: Fill, shadow: Option<Shadow> },
    /// Undo the most recent push.
    Pop,
}

/// Build the paint operations for one frame of the sticker.
///
/// Returns only a `Clear` once the sticker has peeled off.
#[must_use]
pub fn compose(state: &PeelState, config: &StickerConfig) -> Vec<PaintOp> {
    let surface = state.surface();
    let bounds = surface.bounds();
    let mut ops = vec![PaintOp::Clear(bounds)];

    if !state.phase().shows_sticker() {
        return ops;
    }

    let fold = state.fold();
    if fold.is_flat(config.flat_px) {
        ops.push(PaintOp::DrawImage(bounds));
        if state.phase() != Phase::Dragging {
            ops.push(edge_hint(bounds, config));
        }
        return ops;
    }

    let extent = clip_extent(bounds, fold.mid) * config.clip_oversize;

    // Front face: the artwork on the anchor side of the fold.
    ops.push(PaintOp::PushClip(geom::half_plane(&fold, Side::Anchor, extent)));
    ops.push(PaintOp::DrawImage(bounds));
    ops.push(PaintOp::Pop);

    // Rear face: the sticker outline reflected across the fold. Gradient
    // coordinates are pre-mirror, so `anchor` lands on the peeled corner.
    ops.push(PaintOp::PushClip(geom::half_plane(&fold, Side::Drag, extent)));
    ops.push(PaintOp::PushTransform(fold.mirror()));
    ops.push(PaintOp::FillRect {
        rect: bounds,
        fill: Fill::Solid(config.rear_fill.clone()),
        shadow: Some(Shadow {
            color: config.shadow_color.clone(),
            blur: config.shadow_blur_px,
            offset: fold.unit() * -config.shadow_offset_px,
        }),
    });
    ops.push(PaintOp::FillRect {
        rect: bounds,
        fill: Fill::Linear(LinearGradient {
            from: fold.mid,
            to: state.anchor(),
            stops: vec![stop(0.0, &config.crease_dark), stop(1.0, &config.crease_light)],
        }),
        shadow: None,
    });
    ops.push(PaintOp::Pop);
    ops.push(PaintOp::Pop);

    ops
}

/// Whether every push in `ops` is matched by a later pop.
#[must_use]
pub fn is_balanced(ops: &[PaintOp]) -> bool {
    let mut depth: usize = 0;
    for op in ops {
        match op {
            PaintOp::PushClip(_) | PaintOp::PushTransform(_) => depth += 1,
            PaintOp::Pop => {
                let Some(next) = depth.checked_sub(1) else {
                    return false;
                };
                depth = next;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Half-length of a clip quad that covers `bounds` from any fold through `mid`.
///
/// The drag point is not clamped vertically, so `mid` may sit well outside
/// the surface; the reach to the farthest corner is added to the diagonal.
fn clip_extent(bounds: Rect, mid: Point) -> f64 {
    let diagonal = bounds.width.hypot(bounds.height);
    let reach = bounds.corners().iter().map(|c| c.distance(mid)).fold(0.0, f64::max);
    diagonal + reach
}

/// Subtle gradient along the trigger edge signalling that it can be grabbed.
fn edge_hint(bounds: Rect, config: &StickerConfig) -> PaintOp {
    let right = bounds.x + bounds.width;
    let left = right - config.hint_width_px.min(bounds.width);
    PaintOp::FillRect {
        rect: Rect::new(left, bounds.y, right - left, bounds.height),
        fill: Fill::Linear(LinearGradient {
            from: Point::new(left, bounds.y),
            to: Point::new(right, bounds.y),
            stops: vec![stop(0.0, consts::HINT_CLEAR), stop(1.0, &config.hint_color)],
        }),
        shadow: None,
    }
}

fn stop(offset: f32, color: &str) -> ColorStop {
    ColorStop { offset, color: color.to_owned() }
}
