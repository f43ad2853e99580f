//! Presence checks for request fields.

use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

/// Whether a supplied value counts as "present".
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    /// Empty strings are treated the same as an absent field
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for i64 {
    fn is_present(&self) -> bool {
        true
    }
}

/// Unwrap a required field or fail with [`CoreError::MissingField`] naming it.
#[track_caller]
pub fn required<T: Presence>(field: &'static str, value: Option<T>) -> Result<T> {
    match value {
        Some(v) if v.is_present() => Ok(v),
        _ => Err(CoreError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
