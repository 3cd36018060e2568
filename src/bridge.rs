//! Hotkey to host bridge.
//!
//! A document-wide key listener hands every key press to [`HostBridge`]. When
//! the key matches the configured hotkey the browser's default action is
//! suppressed and one [`HostCommand`] goes out over the [`HostChannel`].
//! Every other key is left alone.
//!
//! Sending is fire-and-forget: the host never answers. A missing channel is
//! returned as an error and deliberately not recovered from, since it means
//! the page is not running inside its host.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::fmt;

use crate::config::DEFAULT_FULLSCREEN_KEY;
use crate::error::ShimError;

/// Commands the page sends to the native host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Enter or leave borderless fullscreen.
    ToggleFullscreen,
}

impl HostCommand {
    /// The wire string the host matches on.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToggleFullscreen => "toggle_fullscreen",
        }
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-directional page-to-host message port.
pub trait HostChannel {
    /// Send a string message to the host.
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::HostChannelUnavailable`] if the host did not
    /// expose a channel, or [`ShimError::Js`] if the send itself threw.
    fn post_message(&self, message: &str) -> Result<(), ShimError>;
}

impl<C: HostChannel + ?Sized> HostChannel for &C {
    fn post_message(&self, message: &str) -> Result<(), ShimError> {
        (**self).post_message(message)
    }
}

/// The parts of a key press the bridge needs.
pub trait KeyPress {
    /// Key identifier as reported by the browser (e.g. `"F11"`, `"Escape"`).
    fn key(&self) -> String;

    /// Suppress the browser's default handling of this event.
    fn prevent_default(&self);
}

/// What the bridge did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not the hotkey; default behavior untouched.
    Ignored,
    /// Default suppressed and the command sent.
    Forwarded(HostCommand),
}

/// Forwards the fullscreen hotkey to the host.
#[derive(Debug)]
pub struct HostBridge<C> {
    channel: C,
    hotkey: String,
}

impl<C: HostChannel> HostBridge<C> {
    /// Bridge forwarding `hotkey` over `channel`.
    #[must_use]
    pub fn new(channel: C, hotkey: impl Into<String>) -> Self {
        Self { channel, hotkey: hotkey.into() }
    }

    /// Bridge bound to F11.
    #[must_use]
    pub fn fullscreen(channel: C) -> Self {
        Self::new(channel, DEFAULT_FULLSCREEN_KEY)
    }

    #[must_use]
    pub fn hotkey(&self) -> &str {
        &self.hotkey
    }

    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Handle one key press.
    ///
    /// Matching is exact and case-sensitive on the key identifier.
    ///
    /// # Errors
    ///
    /// Propagates the channel error when the hotkey matched but the message
    /// could not be sent. The default action has already been suppressed.
    pub fn handle_key(&self, event: &impl KeyPress) -> Result<KeyOutcome, ShimError> {
        if event.key() != self.hotkey {
            return Ok(KeyOutcome::Ignored);
        }
        event.prevent_default();
        let command = HostCommand::ToggleFullscreen;
        self.channel.post_message(command.as_str())?;
        log::debug!("forwarded {command} to host");
        Ok(KeyOutcome::Forwarded(command))
    }
}
