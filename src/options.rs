//! Pointer-lock options and the unadjusted-movement override.
//!
//! Callers pass an optional bag of fields to `requestPointerLock`. The
//! interceptor never edits the caller's bag: it copies every field into a
//! fresh one and forces [`UNADJUSTED_MOVEMENT`] to `true` on the copy.
//! [`OptionsBag`] abstracts the bag so the same rule applies to the in-memory
//! [`LockOptions`] and to a live `js_sys::Object`.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ShimError;

/// Field name controlling raw (unaccelerated) movement reporting.
pub const UNADJUSTED_MOVEMENT: &str = "unadjustedMovement";

/// A bag of named option fields that can be copied and overridden.
pub trait OptionsBag: Sized {
    /// A bag with no fields.
    fn empty() -> Self;

    /// A new bag holding every field of `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields cannot be read.
    fn copy_of(source: &Self) -> Result<Self, ShimError>;

    /// Set `key` to a boolean, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the field cannot be written.
    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), ShimError>;
}

/// Build the options actually delivered to the underlying capability.
///
/// Every caller field is carried over unchanged except
/// [`UNADJUSTED_MOVEMENT`], which is always `true`. An absent bag is treated
/// as empty.
///
/// # Errors
///
/// Propagates read/write failures from the bag implementation.
pub fn with_unadjusted_movement<O: OptionsBag>(caller: Option<&O>) -> Result<O, ShimError> {
    let mut merged = match caller {
        Some(source) => O::copy_of(source)?,
        None => O::empty(),
    };
    merged.set_flag(UNADJUSTED_MOVEMENT, true)?;
    Ok(merged)
}

/// In-memory pointer-lock options, keyed by the same field names the browser uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockOptions(Map<String, Value>);

impl LockOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a JSON value. Non-object values yield `None`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The requested unadjusted-movement flag, if the field is a boolean.
    #[must_use]
    pub fn unadjusted_movement(&self) -> Option<bool> {
        self.get(UNADJUSTED_MOVEMENT).and_then(Value::as_bool)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl OptionsBag for LockOptions {
    fn empty() -> Self {
        Self::new()
    }

    fn copy_of(source: &Self) -> Result<Self, ShimError> {
        Ok(source.clone())
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), ShimError> {
        self.0.insert(key.to_owned(), Value::Bool(value));
        Ok(())
    }
}
