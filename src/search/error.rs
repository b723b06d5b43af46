//! Error types for the search flow
//!
//! The facility generator itself never fails; errors come from
//! configuration, position acquisition, and output writing.

use crate::geo::GeolocationError;
use thiserror::Error;

/// Errors that can occur while running a facility search
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Configuration validation failed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Position acquisition failed
    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),

    /// I/O error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while rendering results
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<String> for LocatorError {
    fn from(s: String) -> Self {
        LocatorError::Configuration(s)
    }
}

impl From<anyhow::Error> for LocatorError {
    fn from(error: anyhow::Error) -> Self {
        LocatorError::Configuration(error.to_string())
    }
}

/// Result type for search operations
pub type LocatorResult<T> = Result<T, LocatorError>;
