//! Browser console logging.
//!
//! `tracing` events are forwarded to the `log` facade (tracing's `log`
//! feature) and printed by `console_log`. Panics go to the console through
//! `console_error_panic_hook`.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use std::sync::Once;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

static INIT: Once = Once::new();

/// Route `tracing` events and panics to the browser console.
///
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace` (default
/// `info`). Only the first call has any effect; the widget constructors call
/// this with no level, so hosts wanting another level call it first.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let (parsed, valid) = level_from(level.as_deref());
        if let Err(e) = console_log::init_with_level(parsed) {
            debug!(error = %e, "console logger already installed");
        }
        if !valid {
            warn!(level = ?level, "unknown log level; using info");
        }
    });
}

/// Parse a level name. Returns the level and whether `raw` was understood.
fn level_from(raw: Option<&str>) -> (log::Level, bool) {
    match raw.map(str::parse::<log::Level>) {
        None => (log::Level::Info, true),
        Some(Ok(level)) => (level, true),
        Some(Err(_)) => (log::Level::Info, false),
    }
}
