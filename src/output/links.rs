//! Deep links for facility actions
//!
//! Builds external map-directions URLs and phone-dialing URIs for a
//! facility. Google Maps takes waypoints as `lat,lng` while Naver Map
//! takes them as `lng,lat`, so the two builders differ in coordinate
//! order.

use serde::{Deserialize, Serialize};

use crate::facility::Facility;
use crate::geo::Position;

/// The set of deep links available for one facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityLinks {
    /// Google Maps driving directions from the user to the facility
    pub google_directions: String,
    /// Naver Map driving directions from the user to the facility
    pub naver_directions: String,
    /// Phone-dialing URI for the facility's number
    pub phone: String,
}

impl FacilityLinks {
    /// Build all deep links for a facility relative to the user's position
    pub fn for_facility(origin: &Position, facility: &Facility) -> Self {
        Self {
            google_directions: google_directions_url(origin, facility.lat, facility.lng),
            naver_directions: naver_directions_url(origin, facility.lat, facility.lng),
            phone: phone_uri(&facility.phone),
        }
    }
}

/// Google Maps directions URL, waypoints ordered `lat,lng`
pub fn google_directions_url(origin: &Position, dest_lat: f64, dest_lng: f64) -> String {
    format!(
        "https://www.google.com/maps/dir/{},{}/{},{}",
        origin.lat, origin.lng, dest_lat, dest_lng
    )
}

/// Naver Map car directions URL, waypoints ordered `lng,lat`
pub fn naver_directions_url(origin: &Position, dest_lat: f64, dest_lng: f64) -> String {
    format!(
        "https://map.naver.com/v5/directions/{},{}/{},{}/car",
        origin.lng, origin.lat, dest_lng, dest_lat
    )
}

/// Phone-dialing URI for a facility phone number
pub fn phone_uri(phone: &str) -> String {
    format!("tel:{}", phone)
}
