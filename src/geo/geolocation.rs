//! Geolocation acquisition
//!
//! This module defines the one-shot position query the search flow consumes,
//! together with the four failure categories a position request can end in.
//! The only bundled implementation is simulated: it serves a configured
//! coordinate pair (or a scripted failure) while honoring the caller's
//! cached-position age limit, mirroring how a browser geolocation service
//! behaves from the caller's point of view.

use crate::geo::position::Position;
use crate::types::config::geolocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Options for a one-shot position request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeolocationOptions {
    /// Request high-accuracy positioning
    pub high_accuracy: bool,
    /// Acquisition timeout in milliseconds
    pub timeout_ms: u64,
    /// Maximum accepted age of a cached position in milliseconds
    pub maximum_age_ms: u64,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: geolocation::HIGH_ACCURACY,
            timeout_ms: geolocation::TIMEOUT_MS,
            maximum_age_ms: geolocation::MAXIMUM_AGE_MS,
        }
    }
}

/// The four categorized ways a position request can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum GeolocationError {
    /// The user denied access to location services
    #[error("위치 접근 권한이 거부되었습니다")]
    PermissionDenied,

    /// No position could be determined
    #[error("위치 정보를 사용할 수 없습니다")]
    PositionUnavailable,

    /// The request did not complete within the timeout
    #[error("위치 요청 시간이 초과되었습니다")]
    Timeout,

    /// Any other failure
    #[error("알 수 없는 오류가 발생했습니다")]
    Unknown,
}

/// A one-shot source of the device's current position
pub trait GeolocationProvider {
    /// Request the current position.
    ///
    /// Resolves to a [`Position`] or fails with one of the four
    /// [`GeolocationError`] categories. Failures are never retried here;
    /// the caller decides whether to ask again.
    fn current_position(
        &mut self,
        options: &GeolocationOptions,
    ) -> Result<Position, GeolocationError>;
}

/// Simulated geolocation source serving a fixed coordinate pair
///
/// A previously served position is cached and re-served as long as it is
/// younger than the request's `maximum_age_ms`, matching the cached-position
/// semantics of real geolocation services.
#[derive(Debug, Clone)]
pub struct SimulatedGeolocation {
    lat: f64,
    lng: f64,
    failure: Option<GeolocationError>,
    cached: Option<Position>,
}

impl SimulatedGeolocation {
    /// Seoul City Hall, the default simulated device location
    pub const DEFAULT_COORDINATES: (f64, f64) = (37.5665, 126.9780);

    /// Create a simulated source at the default coordinates
    pub fn new() -> Self {
        let (lat, lng) = Self::DEFAULT_COORDINATES;
        Self::at(lat, lng)
    }

    /// Create a simulated source at specific coordinates
    pub fn at(lat: f64, lng: f64) -> Self {
        Self { lat, lng, failure: None, cached: None }
    }

    /// Create a simulated source that always fails with the given error
    pub fn failing_with(failure: GeolocationError) -> Self {
        let (lat, lng) = Self::DEFAULT_COORDINATES;
        Self { lat, lng, failure: Some(failure), cached: None }
    }

    /// Seed the cache with a previously acquired position
    pub fn with_cached(mut self, position: Position) -> Self {
        self.cached = Some(position);
        self
    }
}

impl Default for SimulatedGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl GeolocationProvider for SimulatedGeolocation {
    fn current_position(
        &mut self,
        options: &GeolocationOptions,
    ) -> Result<Position, GeolocationError> {
        if let Some(failure) = self.failure {
            debug!(error = %failure, "Simulated geolocation failure");
            return Err(failure);
        }

        if let Some(cached) = self.cached {
            // A zero maximum age disables the cache entirely
            if options.maximum_age_ms > 0 && cached.age_ms() < options.maximum_age_ms {
                debug!(age_ms = cached.age_ms(), "Serving cached position");
                return Ok(cached);
            }
        }

        let position = Position::new(self.lat, self.lng);
        self.cached = Some(position);
        debug!(lat = position.lat, lng = position.lng, "Acquired fresh position");
        Ok(position)
    }
}
