use wasm_bindgen::JsValue;

/// Errors raised while sizing the surface or loading tuning values.
#[derive(Debug, thiserror::Error)]
pub enum StickerError {
    #[error("image has unusable natural size {width}x{height}")]
    InvalidImageSize { width: f64, height: f64 },
    #[error("max display width must be positive, got {0}")]
    InvalidMaxWidth(f64),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<StickerError> for JsValue {
    fn from(err: StickerError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
