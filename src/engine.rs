use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::StickerConfig;
use crate::error::StickerError;
use crate::geom::Point;
use crate::input::{Phase, PointerEvent, PointerKind};
use crate::layout::{self, Surface};
use crate::paint::{self, PaintOp};
use crate::peel::PeelState;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Notifications returned from a tick for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The sticker came off. Emitted once per session; the host mounts the
    /// revealed content and the render loop stops.
    Peeled,
    /// The canvas or its 2D context is gone. The render loop stops.
    SurfaceLost,
}

impl Action {
    /// Whether the render loop must not schedule another frame.
    #[must_use]
    pub fn stops_loop(self) -> bool {
        matches!(self, Self::Peeled | Self::SurfaceLost)
    }
}

/// Loading state of the sticker artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Loading,
    Ready,
    /// Load failed or the image had no usable size. Terminal; nothing is drawn.
    Failed,
}

/// Output of one tick: what to paint and what to tell the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tick {
    pub ops: Vec<PaintOp>,
    pub actions: Vec<Action>,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub config: StickerConfig,
    pub image: ImageStatus,
    /// Present once the image is ready and the surface is sized.
    pub peel: Option<PeelState>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: StickerConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Image lifecycle ---

    /// The artwork finished loading. Sizes the surface and opens the peel session.
    ///
    /// `max_width` is the host's cap (e.g. the viewport width); the smaller of
    /// it and the configured cap wins. A second call keeps the existing surface.
    ///
    /// # Errors
    ///
    /// Returns a [`StickerError`] if the natural size or the cap is unusable;
    /// the image is then treated as failed.
    pub fn image_ready(&mut self, natural_width: f64, natural_height: f64, max_width: f64) -> Result<Surface, StickerError> {
        if let Some(peel) = &self.peel {
            debug!("image ready again; keeping session surface");
            return Ok(peel.surface());
        }
        match layout::fit(natural_width, natural_height, max_width.min(self.config.max_width)) {
            Ok(surface) => {
                info!(width = surface.width, height = surface.height, "sticker ready");
                self.image = ImageStatus::Ready;
                self.peel = Some(PeelState::new(surface));
                Ok(surface)
            }
            Err(e) => {
                warn!(error = %e, "sticker image unusable");
                self.image = ImageStatus::Failed;
                Err(e)
            }
        }
    }

    /// The artwork failed to load. Nothing will ever be drawn for this session.
    pub fn image_failed(&mut self) {
        if self.peel.is_none() {
            warn!("sticker image failed to load");
            self.image = ImageStatus::Failed;
        }
    }

    // --- Input ---

    /// Apply a pointer event. Returns whether peel state changed.
    ///
    /// Events before the image is ready, out-of-order events and pointer-downs
    /// outside the trigger band are ignored.
    pub fn on_pointer(&mut self, ev: PointerEvent) -> bool {
        let band = self.config.trigger_band_px;
        let Some(peel) = self.peel.as_mut() else {
            return false;
        };
        match ev.kind {
            PointerKind::Down => peel.start(ev.pos, band),
            PointerKind::Move => peel.update(ev.pos),
            PointerKind::Up | PointerKind::Cancel => peel.end(),
        }
    }

    // --- Frame ---

    /// Advance one animation frame: gate input, ease, compose, gate again.
    ///
    /// Returns an empty tick before the image is ready and after peeling off.
    pub fn tick(&mut self) -> Tick {
        let config = &self.config;
        let Some(peel) = self.peel.as_mut() else {
            return Tick::default();
        };
        if peel.phase() == Phase::PeeledOff {
            return Tick::default();
        }

        // Pointer moves land between ticks; gate them before easing can pull
        // a released point back over the threshold.
        let mut peeled = peel.check_completion(config.peel_threshold_ratio);
        if !peeled {
            peel.settle(config.ease, config.snap_px);
        }
        let ops = paint::compose(peel, config);
        peeled |= peel.check_completion(config.peel_threshold_ratio);

        let mut actions = Vec::new();
        if peeled {
            info!(x = peel.drag().x, "sticker peeled off");
            actions.push(Action::Peeled);
        }
        Tick { ops, actions }
    }

    /// Whether the host should keep scheduling frames.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        self.peel.as_ref().is_some_and(|p| p.phase() != Phase::PeeledOff)
    }

    // --- Queries ---

    /// Current phase; `Idle` until the image is ready.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.peel.as_ref().map_or(Phase::Idle, PeelState::phase)
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.peel.as_ref().map(PeelState::anchor)
    }

    #[must_use]
    pub fn drag(&self) -> Option<Point> {
        self.peel.as_ref().map(PeelState::drag)
    }

    #[must_use]
    pub fn surface(&self) -> Option<Surface> {
        self.peel.as_ref().map(PeelState::surface)
    }
}

/// The full sticker engine. Wraps `EngineCore` and owns the browser canvas and artwork.
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: HtmlImageElement,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas and (possibly still loading) image.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, image: HtmlImageElement, config: StickerConfig) -> Self {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        Self { canvas, image, dpr, core: EngineCore::with_config(config) }
    }

    /// Whether the image element already holds decoded pixels.
    #[must_use]
    pub fn image_complete(&self) -> bool {
        self.image.complete() && self.image.natural_width() > 0
    }

    /// Read the image's natural size, size the surface, and size the canvas to match.
    ///
    /// # Errors
    ///
    /// Propagates sizing errors from [`EngineCore::image_ready`].
    pub fn image_ready(&mut self, max_width: f64) -> Result<Surface, StickerError> {
        let natural_w = f64::from(self.image.natural_width());
        let natural_h = f64::from(self.image.natural_height());
        let surface = self.core.image_ready(natural_w, natural_h, max_width)?;
        self.size_canvas(surface);
        Ok(surface)
    }

    pub fn image_failed(&mut self) {
        self.core.image_failed();
    }

    pub fn on_pointer(&mut self, ev: PointerEvent) -> bool {
        self.core.on_pointer(ev)
    }

    /// Route subsequent pointer events for `pointer_id` to the canvas.
    pub fn capture_pointer(&self, pointer_id: i32) {
        if let Err(e) = self.canvas.set_pointer_capture(pointer_id) {
            debug!(error = ?e, pointer_id, "pointer capture failed");
        }
    }

    pub fn release_pointer(&self, pointer_id: i32) {
        if let Err(e) = self.canvas.release_pointer_capture(pointer_id) {
            debug!(error = ?e, pointer_id, "pointer release failed");
        }
    }

    /// Advance and draw one frame.
    ///
    /// A detached canvas or missing 2D context makes the tick a no-op that
    /// reports [`Action::SurfaceLost`].
    pub fn tick(&mut self) -> Vec<Action> {
        if !self.canvas.is_connected() {
            warn!("sticker canvas detached; stopping");
            return vec![Action::SurfaceLost];
        }
        let Some(ctx) = self.context() else {
            warn!("2d context unavailable; stopping");
            return vec![Action::SurfaceLost];
        };

        let Tick { ops, actions } = self.core.tick();
        if !ops.is_empty() {
            if let Err(e) = render::execute(&ctx, &self.image, &ops, self.dpr) {
                warn!(error = ?e, "sticker frame failed");
            }
        }
        actions
    }

    fn context(&self) -> Option<CanvasRenderingContext2d> {
        match self.canvas.get_context("2d") {
            Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => Some(ctx),
                Err(obj) => {
                    debug!(context = ?obj, "2d context has unexpected type");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                debug!(error = ?e, "get_context failed");
                None
            }
        }
    }

    /// Back the canvas with device pixels and display it at CSS size.
    fn size_canvas(&self, surface: Surface) {
        self.canvas.set_width(device_px(surface.width, self.dpr));
        self.canvas.set_height(device_px(surface.height, self.dpr));
        let style = self.canvas.style();
        for (prop, value) in [("width", surface.width), ("height", surface.height)] {
            if let Err(e) = style.set_property(prop, &format!("{value}px")) {
                debug!(error = ?e, prop, "canvas style update failed");
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().max(0.0) as u32
}
