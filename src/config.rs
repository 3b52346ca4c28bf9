//! Tuning values for interaction, easing and appearance.
//!
//! Defaults come from [`crate::consts`]. Hosts may override any subset by
//! passing a JSON object; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::StickerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickerConfig {
    /// Right-edge band where a drag may start.
    pub trigger_band_px: f64,
    /// Per-tick easing fraction while returning to rest.
    pub ease: f64,
    /// Per-axis snap distance that ends the return animation.
    pub snap_px: f64,
    /// Fold distance below which the sticker is drawn flat.
    pub flat_px: f64,
    /// Peel off once the drag point is left of `width * peel_threshold_ratio`.
    pub peel_threshold_ratio: f64,
    /// Clip quad size in multiples of the larger surface dimension.
    pub clip_oversize: f64,
    pub hint_width_px: f64,
    pub hint_color: String,
    pub rear_fill: String,
    pub shadow_color: String,
    pub shadow_blur_px: f64,
    pub shadow_offset_px: f64,
    pub crease_dark: String,
    pub crease_light: String,
    /// Cap on the on-screen width; the host may lower it to the viewport width.
    pub max_width: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            trigger_band_px: consts::TRIGGER_BAND_PX,
            ease: consts::EASE,
            snap_px: consts::SNAP_PX,
            flat_px: consts::FLAT_PX,
            peel_threshold_ratio: consts::PEEL_THRESHOLD_RATIO,
            clip_oversize: consts::CLIP_OVERSIZE,
            hint_width_px: consts::HINT_WIDTH_PX,
            hint_color: consts::HINT_COLOR.to_owned(),
            rear_fill: consts::REAR_FILL.to_owned(),
            shadow_color: consts::SHADOW_COLOR.to_owned(),
            shadow_blur_px: consts::SHADOW_BLUR_PX,
            shadow_offset_px: consts::SHADOW_OFFSET_PX,
            crease_dark: consts::CREASE_DARK.to_owned(),
            crease_light: consts::CREASE_LIGHT.to_owned(),
            max_width: consts::MAX_WIDTH_PX,
        }
    }
}

impl StickerConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`StickerError::Config`] for malformed JSON and
    /// [`StickerError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, StickerError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`StickerError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), StickerError> {
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(invalid("ease", self.ease));
        }
        if !(self.peel_threshold_ratio > 0.0 && self.peel_threshold_ratio < 1.0) {
            return Err(invalid("peel_threshold_ratio", self.peel_threshold_ratio));
        }
        let positive = [
            ("trigger_band_px", self.trigger_band_px),
            ("snap_px", self.snap_px),
            ("flat_px", self.flat_px),
            ("clip_oversize", self.clip_oversize),
            ("max_width", self.max_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(name, value));
            }
        }
        let non_negative = [
            ("hint_width_px", self.hint_width_px),
            ("shadow_blur_px", self.shadow_blur_px),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, value));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, value: f64) -> StickerError {
    StickerError::InvalidConfig(format!("{field} out of range: {value}"))
}
