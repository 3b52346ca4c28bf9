//! Swipe-to-tilt: a lighter presentation of the same sticker.
//!
//! Instead of folding, the whole sticker rotates about its right edge as the
//! pointer swipes left, then either drops away or springs back on release.
//! It has no fold geometry and no render loop; [`crate::host::TiltWidget`]
//! writes [`TiltGesture::rotation_deg`] and [`TiltGesture::translate_x`] to
//! CSS custom properties.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use tracing::debug;

use crate::consts::{
    TILT_FULL_SWIPE_RATIO, TILT_MAX_ROTATION_DEG, TILT_MAX_TRANSLATE_PX, TILT_START_EDGE_RATIO,
    TILT_SWIPE_MIN_PX,
};

/// How a released gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Swiped far enough; the sticker falls off.
    Fell,
    /// Too short; the sticker springs back flat.
    Reset,
    /// No gesture was active.
    Ignored,
}

impl Release {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fell => "fell",
            Self::Reset => "reset",
            Self::Ignored => "ignored",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Swipe {
    start_x: f64,
    last_x: f64,
    width: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TiltGesture {
    swipe: Option<Swipe>,
    progress: f64,
    peeling: bool,
    fallen: bool,
}

impl TiltGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down at element-local `x` on an element `width` pixels wide.
    ///
    /// Starts only when the press is at least 40% of the width away from the
    /// right edge, and never while fallen.
    pub fn begin(&mut self, x: f64, width: f64) -> bool {
        if self.fallen || width <= 0.0 {
            return false;
        }
        if (width - x) / width < TILT_START_EDGE_RATIO {
            return false;
        }
        self.swipe = Some(Swipe { start_x: x, last_x: x, width });
        self.peeling = true;
        true
    }

    /// Pointer-move. Moving right of the start point flattens the sticker.
    pub fn update(&mut self, x: f64) {
        let Some(swipe) = self.swipe.as_mut() else {
            return;
        };
        let delta = swipe.start_x - x;
        if delta <= 0.0 {
            self.progress = 0.0;
            return;
        }
        let full = TILT_SWIPE_MIN_PX.max(swipe.width * TILT_FULL_SWIPE_RATIO);
        self.progress = (delta / full).min(1.0);
        swipe.last_x = x;
    }

    /// Pointer-up or cancel.
    pub fn release(&mut self) -> Release {
        let Some(swipe) = self.swipe.take() else {
            return Release::Ignored;
        };
        if swipe.start_x - swipe.last_x > TILT_SWIPE_MIN_PX {
            debug!(distance = swipe.start_x - swipe.last_x, "tilt fell");
            self.progress = 1.0;
            self.fallen = true;
            Release::Fell
        } else {
            self.progress = 0.0;
            self.peeling = false;
            Release::Reset
        }
    }

    /// Put the sticker back, e.g. once the fall animation finishes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Tilt progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.progress * TILT_MAX_ROTATION_DEG
    }

    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.progress * TILT_MAX_TRANSLATE_PX
    }

    /// Whether a swipe is in progress (between `begin` and `release`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.swipe.is_some()
    }

    #[must_use]
    pub fn is_peeling(&self) -> bool {
        self.peeling
    }

    #[must_use]
    pub fn is_fallen(&self) -> bool {
        self.fallen
    }
}
