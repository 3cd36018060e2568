//! Patches `HTMLCanvasElement.prototype.requestPointerLock`.
//!
//! Page code (including third-party game code) calls the prototype method
//! directly, so the only way to reach every caller is to replace it once.
//! The replacement is a tiny JS trampoline, shipped as an inline module so
//! pages with a CSP that forbids `'unsafe-eval'` still accept it. It forwards
//! `this` and the options to a Rust closure, which routes the call through
//! [`PointerLockProvider`] and therefore [`RawMovement`](crate::capability::RawMovement).

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, Window};

use crate::capability::{PointerLock, PointerLockProvider};
use crate::error::ShimError;
use crate::lifecycle::OneShot;
use crate::options::OptionsBag;

const CANVAS_CTOR: &str = "HTMLCanvasElement";
const METHOD: &str = "requestPointerLock";

#[wasm_bindgen(inline_js = "export function wrapRequestPointerLock(inner) { \
    return function requestPointerLock(options) { return inner(this, options); }; \
}")]
extern "C" {
    /// Builds `function requestPointerLock(options)` around a `(this, options)` callback.
    #[wasm_bindgen(js_name = wrapRequestPointerLock)]
    fn wrap_request_pointer_lock(inner: &JsValue) -> Function;
}

fn js_err(value: JsValue) -> ShimError {
    ShimError::from_js(&value)
}

impl OptionsBag for Object {
    fn empty() -> Self {
        Object::new()
    }

    fn copy_of(source: &Self) -> Result<Self, ShimError> {
        Ok(Object::assign(&Object::new(), source))
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), ShimError> {
        Reflect::set(self, &JsValue::from_str(key), &JsValue::from_bool(value)).map_err(js_err)?;
        Ok(())
    }
}

/// The browser's own `requestPointerLock`, captured before patching.
#[derive(Debug, Clone)]
pub struct CanvasPointerLock {
    original: Function,
}

impl CanvasPointerLock {
    #[must_use]
    pub fn new(original: Function) -> Self {
        Self { original }
    }
}

impl PointerLock for CanvasPointerLock {
    type Element = JsValue;
    type Options = Object;
    /// The returned promise (or `undefined` on older engines), or the thrown error.
    type Output = Result<JsValue, JsValue>;

    fn request_pointer_lock(&self, element: &JsValue, options: Option<&Object>) -> Self::Output {
        match options {
            Some(options) => self.original.call1(element, options),
            None => self.original.call0(element),
        }
    }
}

/// Patch the prototype once the initial document has loaded.
///
/// If the document is already past `loading` the patch is applied immediately.
pub(super) fn install_on_content_loaded(window: &Window, document: &Document) -> Result<(), ShimError> {
    if document.ready_state() != "loading" {
        patch_canvas_prototype(window)?;
        log::info!("pointer lock interceptor installed (document already loaded)");
        return Ok(());
    }

    let window = window.clone();
    let guard = OneShot::new();
    let handler = Closure::wrap(Box::new(move |_event: Event| -> Result<(), JsValue> {
        match guard.run(|| patch_canvas_prototype(&window)) {
            Some(result) => {
                result.inspect_err(|e| log::error!("pointer lock interceptor failed: {e}"))?;
                log::info!("pointer lock interceptor installed");
            }
            None => log::debug!("content loaded fired again; interceptor already installed"),
        }
        Ok(())
    }) as Box<dyn FnMut(Event) -> Result<(), JsValue>>);

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            handler.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    // The listener detaches itself after one run; the closure lives with the page.
    handler.forget();
    Ok(())
}

/// Replace `HTMLCanvasElement.prototype.requestPointerLock` with the raw-movement wrapper.
///
/// Not idempotent on its own: each call wraps whatever the prototype holds.
/// [`install`](super::install) guards it with a one-shot.
///
/// # Errors
///
/// Returns [`ShimError::CapabilityMissing`] if the page has no canvas
/// pointer-lock method, or [`ShimError::Js`] if the prototype rejects the write.
pub fn patch_canvas_prototype(window: &Window) -> Result<(), ShimError> {
    let ctor = Reflect::get(window, &JsValue::from_str(CANVAS_CTOR)).map_err(js_err)?;
    if ctor.is_undefined() || ctor.is_null() {
        return Err(ShimError::CapabilityMissing("HTMLCanvasElement"));
    }
    let prototype = Reflect::get(&ctor, &JsValue::from_str("prototype")).map_err(js_err)?;
    let original = Reflect::get(&prototype, &JsValue::from_str(METHOD))
        .map_err(js_err)?
        .dyn_into::<Function>()
        .map_err(|_| ShimError::CapabilityMissing("HTMLCanvasElement.prototype.requestPointerLock"))?;

    let provider = PointerLockProvider::new(CanvasPointerLock::new(original));
    provider.install();

    let inner = Closure::wrap(Box::new(move |this: JsValue, options: JsValue| -> Result<JsValue, JsValue> {
        // Spread semantics: `null`, `undefined` and primitives contribute no fields.
        let options = options.is_object().then(|| options.unchecked_ref::<Object>());
        provider.request_pointer_lock(&this, options)?
    }) as Box<dyn Fn(JsValue, JsValue) -> Result<JsValue, JsValue>>);

    let wrapper = wrap_request_pointer_lock(inner.as_ref());
    if !Reflect::set(&prototype, &JsValue::from_str(METHOD), &wrapper).map_err(js_err)? {
        return Err(ShimError::Js("HTMLCanvasElement.prototype.requestPointerLock is not writable".into()));
    }
    inner.forget();
    Ok(())
}
