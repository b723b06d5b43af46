//! Geographic position and coordinate projection
//!
//! This module contains the [`Position`] struct and the small-distance
//! projection used to place generated facilities around the user. The
//! projection treats the local neighborhood as planar: one degree of
//! latitude is taken as 111 km, and longitude degrees are compressed by
//! the cosine of the latitude.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approximate meters per degree of latitude
pub const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// A geographic position in floating-point degrees with an acquisition
/// timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// When the position was acquired
    pub timestamp: DateTime<Utc>,
}

impl Position {
    /// Create a position acquired now
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, timestamp: Utc::now() }
    }

    /// Create a position with an explicit acquisition timestamp
    pub fn with_timestamp(lat: f64, lng: f64, timestamp: DateTime<Utc>) -> Self {
        Self { lat, lng, timestamp }
    }

    /// Latitude in radians
    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Age of this position in milliseconds (zero if the clock went backwards)
    pub fn age_ms(&self) -> u64 {
        (Utc::now() - self.timestamp).num_milliseconds().max(0) as u64
    }

    /// Project a point `distance_m` meters away at compass `bearing_deg`
    /// degrees, returning its (latitude, longitude).
    ///
    /// Longitude displacement is corrected for compression at this latitude.
    pub fn project(&self, distance_m: f64, bearing_deg: f64) -> (f64, f64) {
        let bearing_rad = bearing_deg.to_radians();
        let lat = self.lat + bearing_rad.cos() * distance_m / METERS_PER_DEGREE_LAT;
        let lng = self.lng
            + bearing_rad.sin() * distance_m / (METERS_PER_DEGREE_LAT * self.lat_radians().cos());
        (lat, lng)
    }

    /// Planar distance in meters to a (latitude, longitude) point, the
    /// inverse of [`Position::project`].
    pub fn planar_distance_m(&self, lat: f64, lng: f64) -> f64 {
        let north_m = (lat - self.lat) * METERS_PER_DEGREE_LAT;
        let east_m = (lng - self.lng) * METERS_PER_DEGREE_LAT * self.lat_radians().cos();
        (north_m * north_m + east_m * east_m).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_position_creation() {
        let position = Position::new(37.5665, 126.9780);
        assert_eq!(position.lat, 37.5665);
        assert_eq!(position.lng, 126.9780);
    }

    #[test]
    fn test_projection_due_north() {
        let position = Position::new(37.5665, 126.9780);
        let (lat, lng) = position.project(1_110.0, 0.0);

        // 1110 m north is exactly 0.01 degrees of latitude
        assert!((lat - (37.5665 + 0.01)).abs() < 1e-9);
        assert!((lng - 126.9780).abs() < 1e-9);
    }

    #[test]
    fn test_projection_due_east_is_compressed() {
        let position = Position::new(60.0, 0.0);
        let (lat, lng) = position.project(1_110.0, 90.0);

        // At 60 degrees latitude a longitude degree spans half the meters,
        // so the displacement in degrees doubles
        assert!((lat - 60.0).abs() < 1e-9);
        assert!((lng - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_projection_round_trip() {
        let position = Position::new(37.5665, 126.9780);

        for (distance, bearing) in
            [(50.0, 0.0), (320.5, 45.0), (1_549.9, 137.2), (9_000.0, 271.3), (4_250.0, 359.9)]
        {
            let (lat, lng) = position.project(distance, bearing);
            let back = position.planar_distance_m(lat, lng);
            assert!(
                (back - distance).abs() < 1e-6,
                "distance {} at bearing {} came back as {}",
                distance,
                bearing,
                back
            );
        }
    }

    #[test]
    fn test_age_of_old_position() {
        let old = Position::with_timestamp(37.0, 127.0, Utc::now() - Duration::minutes(10));
        assert!(old.age_ms() >= 10 * 60 * 1000);
    }

    #[test]
    fn test_position_serialization() {
        let position = Position::new(37.5665, 126.9780);
        let json = serde_json::to_string(&position).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(position, deserialized);
    }
}
