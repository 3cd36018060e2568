//! One-shot install guard.
//!
//! The page fires "content loaded" once, but nothing stops a second signal
//! (a re-dispatched event, or the host calling the install entry point after
//! auto-start). [`OneShot`] makes the install step idempotent.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::cell::Cell;

/// Result of an install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// This call performed the install.
    Installed,
    /// An earlier call already installed; nothing was done.
    AlreadyInstalled,
}

/// A flag that can be fired exactly once.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: Cell::new(false) }
    }

    /// Fire the flag. Only the first call reports [`InstallOutcome::Installed`].
    pub fn fire(&self) -> InstallOutcome {
        if self.fired.replace(true) {
            InstallOutcome::AlreadyInstalled
        } else {
            InstallOutcome::Installed
        }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Run `f` on the first call only.
    ///
    /// The flag is set before `f` runs, so a failing `f` is not retried.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        match self.fire() {
            InstallOutcome::Installed => Some(f()),
            InstallOutcome::AlreadyInstalled => None,
        }
    }
}
