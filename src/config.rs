//! Host-supplied configuration.
//!
//! Every field has a default matching the WebView2 host the shim was built
//! for, so the auto-start path needs no configuration at all. Hosts that
//! differ pass a JSON object to the `install` entry point.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ShimError;

/// Default hotkey forwarded to the host.
pub const DEFAULT_FULLSCREEN_KEY: &str = "F11";

/// Shim configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimConfig {
    /// Install the pointer-lock interceptor.
    pub raw_pointer_lock: bool,
    /// Key forwarded to the host as a fullscreen toggle. `None` disables the bridge.
    pub fullscreen_key: Option<String>,
    /// Property path from `window` to the object exposing `postMessage`.
    pub channel_path: Vec<String>,
    /// Console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            raw_pointer_lock: true,
            fullscreen_key: Some(DEFAULT_FULLSCREEN_KEY.to_owned()),
            channel_path: vec!["chrome".to_owned(), "webview".to_owned()],
            log_level: "warn".to_owned(),
        }
    }
}

impl ShimConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::ConfigParse`] if the JSON is malformed, names an
    /// unknown field, has an empty `channel_path`, or an unknown `log_level`.
    pub fn from_json(raw: &str) -> Result<Self, ShimError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ShimError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::ConfigParse`] describing the first violation.
    pub fn validate(&self) -> Result<(), ShimError> {
        if self.channel_path.is_empty() || self.channel_path.iter().any(String::is_empty) {
            return Err(ShimError::ConfigParse("channel_path must name at least one non-empty property".into()));
        }
        if self.fullscreen_key.as_deref() == Some("") {
            return Err(ShimError::ConfigParse("fullscreen_key must not be empty".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    /// The parsed log level.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::ConfigParse`] if `log_level` is not a known level.
    pub fn level_filter(&self) -> Result<LevelFilter, ShimError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ShimError::ConfigParse(format!("unknown log_level: {}", self.log_level)))
    }

    /// The channel path joined with dots, for diagnostics.
    #[must_use]
    pub fn channel_display(&self) -> String {
        self.channel_path.join(".")
    }
}
