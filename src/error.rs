use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page to browser capabilities. None of these are
/// fatal: callers log them and keep rendering static content.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("intersection observer unavailable: {0}")]
    Observer(String),
    #[error("section query failed: {0}")]
    Query(String),
}

impl LandingError {
    pub(crate) fn listener(event: &'static str, value: JsValue) -> Self {
        LandingError::Listener {
            event,
            reason: js_reason(&value),
        }
    }
}

pub(crate) fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
