//! Setup errors for the DOM-facing layer
//!
//! Missing optional markup is not an error (the feature is skipped).
//! These cover a broken browser environment.

use wasm_bindgen::prelude::*;

/// Errors that can occur while mounting an animated group
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("Element '{0}' is not of the expected type")]
    WrongElementType(&'static str),
    #[error("Canvas 2d context unavailable")]
    NoContext,
    #[error("JS call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
