//! The generated facility record
//!
//! This module contains the [`Facility`] struct, the unit the provider
//! produces and the presentation layer renders.

use crate::types::{FacilityCategory, FacilityId};
use serde::{Deserialize, Serialize};

/// A single synthesized nearby facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique identifier for this record
    pub id: FacilityId,
    /// Facility name, drawn from the category's name pool
    pub name: String,
    /// Synthesized street address
    pub address: String,
    /// Distance from the search position, rounded to whole meters
    pub distance_m: u32,
    /// Category the facility was generated for
    pub category: FacilityCategory,
    /// Phone number in the fixed 02-XXXX-YYYY format
    pub phone: String,
    /// Facility latitude in degrees
    pub lat: f64,
    /// Facility longitude in degrees
    pub lng: f64,
}

impl Facility {
    /// Distance formatted for display, switching to kilometers past 1 km
    pub fn distance_display(&self) -> String {
        if self.distance_m >= 1_000 {
            format!("{:.1}km", self.distance_m as f64 / 1_000.0)
        } else {
            format!("{}m", self.distance_m)
        }
    }
}
