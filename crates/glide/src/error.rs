//! Error types for the browser runtime.

use glide_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while installing Glide into a page.
///
/// Navigation and animation never fail with an error; they degrade to "no
/// focus change" or "overlay parked off-stage".
#[derive(Debug, Error)]
pub enum BrowserError {
    /// No global `window` (not running in a browser).
    #[error("no window")]
    NoWindow,

    /// The window has no document.
    #[error("no document")]
    NoDocument,

    /// The document has no body to attach the overlay to.
    #[error("document has no body")]
    NoBody,

    /// The supplied configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BrowserError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<BrowserError> for wasm_bindgen::JsValue {
    fn from(err: BrowserError) -> Self {
        Self::from_str(&err.to_string())
    }
}
