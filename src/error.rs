//! Errors produced while installing or running the shim.

use wasm_bindgen::{JsCast, JsValue};

/// Errors produced by shim operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShimError {
    /// The host messaging channel is not exposed to this page.
    ///
    /// Usually means the script was loaded outside its intended host.
    #[error("host channel unavailable at window.{path}")]
    HostChannelUnavailable { path: String },

    /// A browser global or method needed at install time is missing.
    #[error("browser capability missing: {0}")]
    CapabilityMissing(&'static str),

    /// The host-supplied configuration was rejected.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl ShimError {
    /// Capture a thrown JavaScript value as a [`ShimError::Js`].
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Self::Js(String::from(err.message()));
        }
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<ShimError> for JsValue {
    fn from(err: ShimError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
