//! Geographic primitives and geolocation acquisition
//!
//! This module contains the position type with its small-distance projection
//! and the one-shot geolocation interface the search flow consumes.

pub mod geolocation;
pub mod position;

// Re-export all public types for convenience
pub use geolocation::{
    GeolocationError, GeolocationOptions, GeolocationProvider, SimulatedGeolocation,
};
pub use position::{Position, METERS_PER_DEGREE_LAT};
