//! Shared numeric constants for the sticker crate.
//!
//! These are the defaults behind [`crate::config::StickerConfig`]; the engine
//! always reads the config, never these directly.

// ── Interaction ─────────────────────────────────────────────────

/// Width of the band along the right edge where a peel may start, in pixels.
pub const TRIGGER_BAND_PX: f64 = 60.0;

/// Fraction of the surface width the drag point must pass (leftwards) to peel off.
pub const PEEL_THRESHOLD_RATIO: f64 = 0.1;

// ── Return-to-rest ──────────────────────────────────────────────

/// Per-tick fraction of the remaining distance covered while easing back.
pub const EASE: f64 = 0.2;

/// Per-axis distance below which the drag point snaps onto the anchor.
pub const SNAP_PX: f64 = 0.5;

// ── Geometry ────────────────────────────────────────────────────

/// Fold distance below which the sticker is drawn flat.
pub const FLAT_PX: f64 = 1.0;

/// Multiplier on the distance a clip quad must reach to cover the surface.
pub const CLIP_OVERSIZE: f64 = 4.0;

// ── Appearance ──────────────────────────────────────────────────

/// Width of the idle affordance gradient along the trigger edge.
pub const HINT_WIDTH_PX: f64 = 24.0;

pub const HINT_COLOR: &str = "rgba(0, 0, 0, 0.14)";
pub const HINT_CLEAR: &str = "rgba(0, 0, 0, 0)";

/// Underside of the sticker.
pub const REAR_FILL: &str = "#eeeae4";

pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.35)";
pub const SHADOW_BLUR_PX: f64 = 12.0;
pub const SHADOW_OFFSET_PX: f64 = 4.0;

/// Crease gradient: dark at the fold, fading toward the peeled corner.
pub const CREASE_DARK: &str = "rgba(0, 0, 0, 0.28)";
pub const CREASE_LIGHT: &str = "rgba(255, 255, 255, 0.18)";

// ── Layout ──────────────────────────────────────────────────────

/// Default cap on the on-screen sticker width, in CSS pixels.
pub const MAX_WIDTH_PX: f64 = 480.0;

// ── Tilt presentation ───────────────────────────────────────────

/// Minimum leftward swipe that makes a tilted sticker fall.
pub const TILT_SWIPE_MIN_PX: f64 = 40.0;

/// A tilt gesture starts only at least this fraction of the width from the right edge.
pub const TILT_START_EDGE_RATIO: f64 = 0.4;

/// Fraction of the width that maps to full tilt progress.
pub const TILT_FULL_SWIPE_RATIO: f64 = 0.6;

/// Rotation at full progress, in degrees (negative tilts toward the viewer).
pub const TILT_MAX_ROTATION_DEG: f64 = -75.0;

/// Horizontal shift at full progress, in pixels.
pub const TILT_MAX_TRANSLATE_PX: f64 = -10.0;
