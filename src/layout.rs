//! Surface sizing: fit the image into the host's width cap, keeping its aspect ratio.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::error::StickerError;
use crate::geom::Rect;

/// On-screen sticker dimensions in CSS pixels. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Size the surface from the image's natural size and a maximum display width.
///
/// Images narrower than the cap keep their natural size; wider ones are
/// scaled down.
///
/// # Errors
///
/// Returns [`StickerError::InvalidImageSize`] if either natural dimension is
/// zero, negative or non-finite, and [`StickerError::InvalidMaxWidth`] if the
/// cap is not positive.
pub fn fit(natural_width: f64, natural_height: f64, max_width: f64) -> Result<Surface, StickerError> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(natural_width) || !usable(natural_height) {
        return Err(StickerError::InvalidImageSize { width: natural_width, height: natural_height });
    }
    if !usable(max_width) {
        return Err(StickerError::InvalidMaxWidth(max_width));
    }
    let width = natural_width.min(max_width);
    let height = width * natural_height / natural_width;
    Ok(Surface { width, height })
}
