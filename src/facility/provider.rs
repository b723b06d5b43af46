//! The facility data source capability
//!
//! Callers depend on this trait rather than the simulated generator, so a
//! real search backend could satisfy the same interface without touching
//! the search flow.

use crate::facility::record::Facility;
use crate::geo::Position;
use crate::types::FacilityCategory;

/// A source of nearby facilities for a position and category
pub trait FacilityProvider {
    /// Produce the facilities near `position` matching `category`, sorted
    /// ascending by distance.
    ///
    /// This operation has no failure modes: every valid position and
    /// category yields a non-empty list.
    fn find_nearby(&mut self, position: &Position, category: FacilityCategory) -> Vec<Facility>;
}
