//! Input model: normalized pointer events and the interaction phase.
//!
//! The host translates mouse and touch events into [`PointerEvent`]s in
//! surface-local CSS pixels before handing them to the engine. Events only
//! ever write peel state; painting happens on the next tick.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The platform aborted the gesture; handled exactly like `Up`.
    Cancel,
}

/// A single normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Surface-local position in CSS pixels.
    pub pos: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, pos: Point::new(x, y) }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }
}

/// Where the peel session is in its lifecycle.
///
/// `Idle`, `Dragging` and `Returning` all draw the sticker. `PeeledOff` is
/// terminal: the render loop stops and the host shows the revealed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest, waiting for a pointer-down in the trigger band.
    #[default]
    Idle,
    /// Pointer is down and driving the drag point.
    Dragging,
    /// Pointer released; the drag point is easing back to the anchor.
    Returning,
    /// Sticker removed. No transition out of this phase.
    PeeledOff,
}

impl Phase {
    /// Whether the sticker is still drawn in this phase.
    #[must_use]
    pub fn shows_sticker(self) -> bool {
        !matches!(self, Self::PeeledOff)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Returning => "returning",
            Self::PeeledOff => "peeled_off",
        }
    }
}
