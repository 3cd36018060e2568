//! The pointer-lock seam.
//!
//! [`PointerLock`] is the capability exposed by the rendering-surface element.
//! [`RawMovement`] decorates any implementation so every request asks for
//! unadjusted movement, and [`PointerLockProvider`] is the single composition
//! point callers go through: once installed it routes every request through
//! the decorator for the rest of its lifetime.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use crate::error::ShimError;
use crate::lifecycle::{InstallOutcome, OneShot};
use crate::options::{OptionsBag, with_unadjusted_movement};

/// A pointer-lock-request capability.
///
/// `Output` is whatever the underlying request produces, including any
/// asynchronous completion handle; decorators return it unmodified.
pub trait PointerLock {
    /// The element the request acts on.
    type Element: ?Sized;
    /// The options bag accepted by the request.
    type Options: OptionsBag;
    /// The request's result.
    type Output;

    fn request_pointer_lock(&self, element: &Self::Element, options: Option<&Self::Options>) -> Self::Output;
}

impl<P: PointerLock + ?Sized> PointerLock for &P {
    type Element = P::Element;
    type Options = P::Options;
    type Output = P::Output;

    fn request_pointer_lock(&self, element: &Self::Element, options: Option<&Self::Options>) -> Self::Output {
        (**self).request_pointer_lock(element, options)
    }
}

/// Decorator that forces unadjusted movement on every request.
#[derive(Debug, Clone)]
pub struct RawMovement<P> {
    inner: P,
}

impl<P> RawMovement<P> {
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: PointerLock> PointerLock for RawMovement<P> {
    type Element = P::Element;
    type Options = P::Options;
    type Output = Result<P::Output, ShimError>;

    fn request_pointer_lock(&self, element: &Self::Element, options: Option<&Self::Options>) -> Self::Output {
        let merged = with_unadjusted_movement(options)?;
        log::trace!("pointer lock requested with unadjusted movement");
        Ok(self.inner.request_pointer_lock(element, Some(&merged)))
    }
}

/// Owns the original capability and decides whether requests are intercepted.
#[derive(Debug)]
pub struct PointerLockProvider<P> {
    original: P,
    installed: OneShot,
}

impl<P: PointerLock> PointerLockProvider<P> {
    /// Capture the original capability. Requests pass through untouched until [`install`](Self::install).
    #[must_use]
    pub fn new(original: P) -> Self {
        Self { original, installed: OneShot::new() }
    }

    /// Start routing requests through [`RawMovement`]. Idempotent.
    pub fn install(&self) -> InstallOutcome {
        self.installed.fire()
    }

    #[must_use]
    pub fn is_intercepting(&self) -> bool {
        self.installed.has_fired()
    }

    /// The captured original capability.
    #[must_use]
    pub fn original(&self) -> &P {
        &self.original
    }
}

impl<P: PointerLock> PointerLock for PointerLockProvider<P> {
    type Element = P::Element;
    type Options = P::Options;
    type Output = Result<P::Output, ShimError>;

    fn request_pointer_lock(&self, element: &Self::Element, options: Option<&Self::Options>) -> Self::Output {
        if self.is_intercepting() {
            RawMovement::new(&self.original).request_pointer_lock(element, options)
        } else {
            Ok(self.original.request_pointer_lock(element, options))
        }
    }
}
