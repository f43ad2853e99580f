use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("You are missing the {field} property. {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the offending request field, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::MissingField { field, .. } => Some(*field),
        }
    }

    /// Client-facing message without the source location
    pub fn message(&self) -> String {
        match self {
            CoreError::MissingField { field, .. } => {
                format!("You are missing the {field} property.")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
