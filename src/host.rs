//! Browser entry points: the `StickerWidget` and `TiltWidget` exported to JavaScript.
//!
//! `StickerWidget` owns the engine behind `Rc<RefCell<_>>` so DOM event
//! handlers and the `requestAnimationFrame` callback can share it. Event
//! handlers only write peel state; the frame callback is the only thing that
//! paints. `TiltWidget` has no loop: each event updates CSS custom properties
//! and the stylesheet animates them.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlImageElement};

use crate::config::StickerConfig;
use crate::engine::{Action, Engine};
use crate::input::{PointerEvent, PointerKind};
use crate::logging;
use crate::tilt::{Release, TiltGesture};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// State of the animation-frame loop.
#[derive(Default)]
struct FrameLoop {
    running: bool,
    handle: Option<i32>,
    callback: Option<FrameCallback>,
}

#[wasm_bindgen]
pub struct StickerWidget {
    engine: Rc<RefCell<Engine>>,
    frames: Rc<RefCell<FrameLoop>>,
    on_peeled: Rc<RefCell<Option<Function>>>,
    max_width: f64,
}

#[wasm_bindgen]
impl StickerWidget {
    /// Bind a widget to `canvas`, drawing `image` at most `max_width` CSS pixels wide.
    ///
    /// `config_json` optionally overrides tuning values. If the image has
    /// already loaded, the surface is sized and the loop started immediately.
    ///
    /// # Errors
    ///
    /// Rejects malformed or out-of-range config.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        image: HtmlImageElement,
        max_width: f64,
        config_json: Option<String>,
    ) -> Result<StickerWidget, JsValue> {
        logging::init_logging(None);
        let config = match config_json {
            Some(raw) => StickerConfig::from_json(&raw)?,
            None => StickerConfig::default(),
        };
        let widget = Self {
            engine: Rc::new(RefCell::new(Engine::new(canvas, image, config))),
            frames: Rc::new(RefCell::new(FrameLoop::default())),
            on_peeled: Rc::new(RefCell::new(None)),
            max_width,
        };
        let complete = widget.engine.borrow().image_complete();
        if complete {
            widget.on_image_load()?;
        }
        Ok(widget)
    }

    /// Image `load` handler: size the surface and start drawing.
    ///
    /// # Errors
    ///
    /// Fails if the image reports an unusable natural size.
    pub fn on_image_load(&self) -> Result<(), JsValue> {
        self.engine.borrow_mut().image_ready(self.max_width)?;
        self.start();
        Ok(())
    }

    /// Image `error` handler. The widget stays blank; retrying is up to the host.
    pub fn on_image_error(&self) {
        self.engine.borrow_mut().image_failed();
        self.stop();
    }

    /// Register the one-shot callback fired when the sticker peels off.
    pub fn set_on_peeled(&self, callback: Function) {
        *self.on_peeled.borrow_mut() = Some(callback);
    }

    /// Pointer-down in canvas-local CSS pixels. Captures `pointer_id` when a peel starts.
    pub fn pointer_down(&self, x: f64, y: f64, pointer_id: Option<i32>) -> bool {
        let mut engine = self.engine.borrow_mut();
        let started = engine.on_pointer(PointerEvent::down(x, y));
        if let (true, Some(id)) = (started, pointer_id) {
            engine.capture_pointer(id);
        }
        started
    }

    pub fn pointer_move(&self, x: f64, y: f64) -> bool {
        self.engine.borrow_mut().on_pointer(PointerEvent::moved(x, y))
    }

    pub fn pointer_up(&self, x: f64, y: f64, pointer_id: Option<i32>) -> bool {
        self.pointer_end(PointerKind::Up, x, y, pointer_id)
    }

    pub fn pointer_cancel(&self, x: f64, y: f64, pointer_id: Option<i32>) -> bool {
        self.pointer_end(PointerKind::Cancel, x, y, pointer_id)
    }

    /// Current interaction phase (`idle`, `dragging`, `returning`, `peeled_off`).
    #[must_use]
    pub fn phase(&self) -> String {
        self.engine.borrow().core.phase().as_str().to_owned()
    }

    /// Start the frame loop. Does nothing until the image is ready, after
    /// peeling off, or if already running.
    pub fn start(&self) -> bool {
        if !self.engine.borrow().core.wants_frames() {
            return false;
        }
        {
            let mut frames = self.frames.borrow_mut();
            if frames.running {
                return false;
            }
            frames.running = true;
            if frames.callback.is_none() {
                frames.callback = Some(self.frame_callback());
            }
        }
        schedule(&self.frames);
        true
    }

    /// Stop the frame loop, e.g. when the host unmounts the widget.
    pub fn stop(&self) {
        let mut frames = self.frames.borrow_mut();
        frames.running = false;
        if let Some(handle) = frames.handle.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(handle) {
                    debug!(error = ?e, "cancel_animation_frame failed");
                }
            }
        }
    }
}

impl StickerWidget {
    fn pointer_end(&self, kind: PointerKind, x: f64, y: f64, pointer_id: Option<i32>) -> bool {
        let mut engine = self.engine.borrow_mut();
        let ended = engine.on_pointer(PointerEvent::new(kind, x, y));
        if let Some(id) = pointer_id {
            engine.release_pointer(id);
        }
        ended
    }

    fn frame_callback(&self) -> FrameCallback {
        let engine = Rc::clone(&self.engine);
        let frames = Rc::clone(&self.frames);
        let on_peeled = Rc::clone(&self.on_peeled);

        Closure::wrap(Box::new(move |_ts: f64| {
            {
                let mut state = frames.borrow_mut();
                state.handle = None;
                if !state.running {
                    return;
                }
            }

            let actions = engine.borrow_mut().tick();
            if actions.iter().any(|a| a.stops_loop()) {
                frames.borrow_mut().running = false;
            } else {
                schedule(&frames);
            }

            if actions.contains(&Action::Peeled) {
                notify(&on_peeled);
            }
        }) as Box<dyn FnMut(f64)>)
    }
}

impl Drop for StickerWidget {
    fn drop(&mut self) {
        self.stop();
        self.frames.borrow_mut().callback.take();
    }
}

/// Swipe-to-tilt sticker. Writes `--peel-rotation` and `--peel-translate-x`
/// on `element` and toggles its `is-peeling` / `is-fallen` classes.
#[wasm_bindgen]
pub struct TiltWidget {
    element: HtmlElement,
    gesture: TiltGesture,
}

#[wasm_bindgen]
impl TiltWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement) -> TiltWidget {
        logging::init_logging(None);
        let widget = Self { element, gesture: TiltGesture::new() };
        widget.apply();
        widget
    }

    /// Pointer-down at viewport `client_x`. Captures `pointer_id` when a swipe starts.
    pub fn pointer_down(&mut self, client_x: f64, pointer_id: Option<i32>) -> bool {
        let rect = self.element.get_bounding_client_rect();
        let started = self.gesture.begin(client_x - rect.left(), rect.width());
        if started {
            if let Some(id) = pointer_id {
                if let Err(e) = self.element.set_pointer_capture(id) {
                    debug!(error = ?e, pointer_id = id, "pointer capture failed");
                }
            }
            self.apply();
        }
        started
    }

    pub fn pointer_move(&mut self, client_x: f64) {
        if !self.gesture.is_active() {
            return;
        }
        let left = self.element.get_bounding_client_rect().left();
        self.gesture.update(client_x - left);
        self.apply();
    }

    /// Pointer-up or cancel. Returns `fell`, `reset` or `ignored`.
    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> String {
        let release = self.gesture.release();
        if release != Release::Ignored {
            if let Some(id) = pointer_id {
                if let Err(e) = self.element.release_pointer_capture(id) {
                    debug!(error = ?e, pointer_id = id, "pointer release failed");
                }
            }
            self.apply();
        }
        release.as_str().to_owned()
    }

    /// The fall animation ended: put the sticker back.
    pub fn animation_end(&mut self) {
        self.gesture.reset();
        self.apply();
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.gesture.progress()
    }

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.gesture.rotation_deg()
    }

    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.gesture.translate_x()
    }

    #[must_use]
    pub fn is_fallen(&self) -> bool {
        self.gesture.is_fallen()
    }
}

impl TiltWidget {
    fn apply(&self) {
        let style = self.element.style();
        let props = [
            ("--peel-rotation", format!("{}deg", self.gesture.rotation_deg())),
            ("--peel-translate-x", format!("{}px", self.gesture.translate_x())),
        ];
        for (prop, value) in props {
            if let Err(e) = style.set_property(prop, &value) {
                debug!(error = ?e, prop, "tilt style update failed");
            }
        }
        let classes = self.element.class_list();
        for (class, on) in [("is-peeling", self.gesture.is_peeling()), ("is-fallen", self.gesture.is_fallen())] {
            if let Err(e) = classes.toggle_with_force(class, on) {
                debug!(error = ?e, class, "tilt class update failed");
            }
        }
    }
}

fn schedule(frames: &RefCell<FrameLoop>) {
    let mut state = frames.borrow_mut();
    let Some(window) = web_sys::window() else {
        warn!("no window; sticker loop stopped");
        state.running = false;
        return;
    };
    let Some(callback) = state.callback.as_ref() else {
        state.running = false;
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => state.handle = Some(handle),
        Err(e) => {
            warn!(error = ?e, "request_animation_frame failed; sticker loop stopped");
            state.running = false;
        }
    }
}

/// Fire the completion callback. Cloned out first so the callback may replace itself.
fn notify(on_peeled: &RefCell<Option<Function>>) {
    let callback = on_peeled.borrow().clone();
    if let Some(f) = callback {
        if let Err(e) = f.call0(&JsValue::NULL) {
            warn!(error = ?e, "on_peeled callback threw");
        }
    }
}
