//! Peel session state: the anchor and drag points, the interaction phase, and
//! the completion gate.
//!
//! [`PeelState`] is the single record both the pointer handlers and the tick
//! loop work on. Pointer handlers call [`PeelState::start`],
//! [`PeelState::update`] and [`PeelState::end`]. Each tick calls
//! [`PeelState::settle`] then [`PeelState::check_completion`].

#[cfg(test)]
#[path = "peel_test.rs"]
mod peel_test;

use tracing::debug;

use crate::animate;
use crate::geom::{self, Fold, Point};
use crate::input::Phase;
use crate::layout::Surface;

#[derive(Debug, Clone)]
pub struct PeelState {
    surface: Surface,
    anchor: Point,
    drag: Point,
    phase: Phase,
}

impl PeelState {
    /// New session at rest, anchored to the middle of the right edge.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        let rest = Point::new(surface.width, surface.height * 0.5);
        Self { surface, anchor: rest, drag: rest, phase: Phase::Idle }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn drag(&self) -> Point {
        self.drag
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Current fold line, derived fresh from the anchor and drag points.
    #[must_use]
    pub fn fold(&self) -> Fold {
        geom::fold(self.anchor, self.drag)
    }

    /// Whether `p` lies inside the surface within `band_px` of the right edge.
    #[must_use]
    pub fn in_trigger_band(&self, p: Point, band_px: f64) -> bool {
        let Surface { width, height } = self.surface;
        let left = (width - band_px).max(0.0);
        (left..=width).contains(&p.x) && (0.0..=height).contains(&p.y)
    }

    /// Pointer-down at `p`. Returns whether a drag started.
    ///
    /// Ignored while a drag is already active, after the sticker has peeled
    /// off, and outside the trigger band.
    pub fn start(&mut self, p: Point, band_px: f64) -> bool {
        if matches!(self.phase, Phase::Dragging | Phase::PeeledOff) {
            return false;
        }
        if !self.in_trigger_band(p, band_px) {
            return false;
        }
        self.anchor = Point::new(self.surface.width, p.y);
        self.drag = self.anchor;
        self.set_phase(Phase::Dragging);
        true
    }

    /// Pointer-move at `p`. The drag point cannot pass the starting edge.
    pub fn update(&mut self, p: Point) -> bool {
        if self.phase != Phase::Dragging {
            return false;
        }
        self.drag = Point::new(p.x.min(self.surface.width), p.y);
        true
    }

    /// Pointer-up or cancel. The drag point starts easing back.
    pub fn end(&mut self) -> bool {
        if self.phase != Phase::Dragging {
            return false;
        }
        self.set_phase(Phase::Returning);
        true
    }

    /// One return-to-rest tick. No-op while dragging or after peeling off.
    pub fn settle(&mut self, ease: f64, snap_px: f64) {
        if matches!(self.phase, Phase::Dragging | Phase::PeeledOff) {
            return;
        }
        self.drag = animate::step(self.anchor, self.drag, ease, snap_px);
        if self.phase == Phase::Returning && self.drag == self.anchor {
            self.set_phase(Phase::Idle);
        }
    }

    /// Completion gate. Returns `true` exactly once: on the tick the drag point
    /// first lies left of `width * ratio`, whether or not the pointer is down.
    pub fn check_completion(&mut self, ratio: f64) -> bool {
        if self.phase == Phase::PeeledOff {
            return false;
        }
        if self.drag.x < self.surface.width * ratio {
            self.set_phase(Phase::PeeledOff);
            return true;
        }
        false
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = self.phase.as_str(), to = phase.as_str(), x = self.drag.x, y = self.drag.y, "peel phase");
        self.phase = phase;
    }
}
