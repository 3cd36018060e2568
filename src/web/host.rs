//! Host channel and the document-wide hotkey listener.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, KeyboardEvent, Window};

use crate::bridge::{HostBridge, HostChannel, KeyPress};
use crate::error::ShimError;

/// `postMessage` on an object the host exposes under `window`.
///
/// WebView2 exposes `window.chrome.webview`; wry-based hosts expose
/// `window.ipc`. The path is resolved on every send, since some hosts attach
/// the object after the first script runs.
#[derive(Debug, Clone)]
pub struct WebViewChannel {
    window: Window,
    path: Vec<String>,
}

impl WebViewChannel {
    #[must_use]
    pub fn new(window: Window, path: Vec<String>) -> Self {
        Self { window, path }
    }

    fn unavailable(&self) -> ShimError {
        ShimError::HostChannelUnavailable { path: self.path.join(".") }
    }

    /// Walk `window.<path>` and return the target object with its `postMessage`.
    fn resolve(&self) -> Result<(JsValue, Function), ShimError> {
        let mut target: JsValue = self.window.clone().into();
        for segment in &self.path {
            target = Reflect::get(&target, &JsValue::from_str(segment)).map_err(|e| ShimError::from_js(&e))?;
            if target.is_undefined() || target.is_null() {
                return Err(self.unavailable());
            }
        }
        let post = Reflect::get(&target, &JsValue::from_str("postMessage"))
            .map_err(|e| ShimError::from_js(&e))?
            .dyn_into::<Function>()
            .map_err(|_| self.unavailable())?;
        Ok((target, post))
    }
}

impl HostChannel for WebViewChannel {
    fn post_message(&self, message: &str) -> Result<(), ShimError> {
        let (target, post) = self.resolve()?;
        post.call1(&target, &JsValue::from_str(message))
            .map_err(|e| ShimError::from_js(&e))?;
        Ok(())
    }
}

impl KeyPress for KeyboardEvent {
    fn key(&self) -> String {
        KeyboardEvent::key(self)
    }

    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Attach a `keydown` listener that forwards `hotkey` to the host for the
/// lifetime of the page.
///
/// A send failure is thrown out of the listener so the page reports it as an
/// uncaught error.
pub(super) fn listen(window: &Window, document: &Document, hotkey: &str, channel_path: &[String]) -> Result<(), ShimError> {
    let bridge = HostBridge::new(WebViewChannel::new(window.clone(), channel_path.to_vec()), hotkey);
    let handler = Closure::wrap(Box::new(move |event: KeyboardEvent| -> Result<(), JsValue> {
        bridge.handle_key(&event)?;
        Ok(())
    }) as Box<dyn FnMut(KeyboardEvent) -> Result<(), JsValue>>);

    document
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
        .map_err(|e| ShimError::from_js(&e))?;
    handler.forget();
    log::debug!("listening for {hotkey} on document");
    Ok(())
}
