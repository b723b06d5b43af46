//! Search state
//!
//! A single explicit state object holds the current position, filter, and
//! facility list, replacing hidden process-wide mutable state. Every update
//! replaces the relevant part wholesale; the facility list is never merged.

use crate::facility::Facility;
use crate::geo::Position;
use crate::types::FacilityCategory;
use serde::{Deserialize, Serialize};

/// The current position / filter / facility-list triple, plus the
/// generation counter used to discard stale search completions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// The most recently acquired position, if any
    pub position: Option<Position>,
    /// The active category filter
    pub filter: FacilityCategory,
    /// The facility list from the newest completed search
    pub facilities: Vec<Facility>,
    /// Monotonically increasing search generation
    pub generation: u64,
}

impl SearchState {
    /// Create an empty state with the default filter
    pub fn new() -> Self {
        Self {
            position: None,
            filter: FacilityCategory::default(),
            facilities: Vec::new(),
            generation: 0,
        }
    }

    /// Whether a position has been acquired
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Number of facilities in the current list
    pub fn result_count(&self) -> usize {
        self.facilities.len()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
