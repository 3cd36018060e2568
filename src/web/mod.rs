//! Browser wiring for the shim.
//!
//! The modules above are browser-free; this one binds them to the live page.
//! [`install`] is the single composition point: it sets up console logging,
//! schedules the pointer-lock interceptor for "content loaded" and attaches
//! the hotkey listener. It runs at most once per page no matter how many
//! entry points call it.
//!
//! With the default `auto-start` feature the module installs itself with
//! [`ShimConfig::default`] on instantiation. Hosts that need another config
//! build without `auto-start`, which swaps the start hook for an exported
//! `install(configJson)`. Only one of the two exists in any build.

mod host;
mod interceptor;

pub use host::WebViewChannel;
pub use interceptor::{CanvasPointerLock, patch_canvas_prototype};

use wasm_bindgen::prelude::*;

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::lifecycle::{InstallOutcome, OneShot};

thread_local! {
    static PAGE: OneShot = const { OneShot::new() };
}

/// Install the shim into the current page.
///
/// # Errors
///
/// Returns an error if `window`/`document` are unavailable, the config has a
/// bad log level, or a listener cannot be attached. A failed install is not
/// retried.
pub fn install(config: &ShimConfig) -> Result<InstallOutcome, ShimError> {
    if PAGE.with(OneShot::fire) == InstallOutcome::AlreadyInstalled {
        log::debug!("shim already installed; ignoring repeated install");
        return Ok(InstallOutcome::AlreadyInstalled);
    }
    init_logging(config)?;

    let window = web_sys::window().ok_or(ShimError::CapabilityMissing("window"))?;
    let document = window.document().ok_or(ShimError::CapabilityMissing("document"))?;

    if config.raw_pointer_lock {
        interceptor::install_on_content_loaded(&window, &document)?;
    }
    if let Some(hotkey) = &config.fullscreen_key {
        host::listen(&window, &document, hotkey, &config.channel_path)?;
    }

    log::info!(
        "webview shim installed (raw_pointer_lock={}, hotkey={:?}, channel=window.{})",
        config.raw_pointer_lock,
        config.fullscreen_key,
        config.channel_display()
    );
    Ok(InstallOutcome::Installed)
}

fn init_logging(config: &ShimConfig) -> Result<(), ShimError> {
    console_error_panic_hook::set_once();
    let Some(level) = config.level_filter()?.to_level() else {
        return Ok(());
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already initialised");
    }
    Ok(())
}

/// Install with a JSON config object. Unset fields take their defaults.
///
/// # Errors
///
/// Throws if the config is rejected or the install fails.
#[cfg(not(feature = "auto-start"))]
#[wasm_bindgen(js_name = install)]
pub fn install_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = ShimConfig::from_json(config_json).inspect_err(|e| log::error!("{e}"))?;
    install(&config).inspect_err(|e| log::error!("shim install failed: {e}"))?;
    Ok(())
}

/// Install with [`ShimConfig::default`] when the module is instantiated.
///
/// # Errors
///
/// Throws if the install fails; the page reports it as an uncaught error.
#[cfg(feature = "auto-start")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install(&ShimConfig::default()).inspect_err(|e| log::error!("shim install failed: {e}"))?;
    Ok(())
}
