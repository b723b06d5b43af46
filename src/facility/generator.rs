//! Simulated facility generation
//!
//! This module contains the simulated [`FacilityProvider`] implementation.
//! It synthesizes plausible nearby facilities for a position and category:
//! names come from the category's pool, distances from the category's range,
//! and coordinates from projecting a random distance/bearing pair away from
//! the search position.

use crate::facility::catalog::{self, DISTRICTS};
use crate::facility::provider::FacilityProvider;
use crate::facility::record::Facility;
use crate::geo::Position;
use crate::types::{FacilityCategory, FacilityId};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

/// Generator producing randomized facility lists
pub struct SimulatedFacilityProvider {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for SimulatedFacilityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedFacilityProvider").finish()
    }
}

impl SimulatedFacilityProvider {
    /// Create a new provider backed by the thread-local RNG
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()) }
    }

    /// Create a new provider with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)) }
    }

    /// Create a provider from an optional seed
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Synthesize an address from a random district and plot number
    fn generate_address(&mut self) -> String {
        let district = DISTRICTS[self.rng.gen_range(0..DISTRICTS.len())];
        let plot = self.rng.gen_range(1..=999);
        format!("{} {} {}번지", catalog::CITY, district, plot)
    }

    /// Synthesize a phone number in the fixed 02-XXXX-YYYY format
    fn generate_phone(&mut self) -> String {
        let exchange: u32 = self.rng.gen_range(1_000..=9_999);
        let line: u32 = self.rng.gen_range(1_000..=9_999);
        format!("02-{}-{}", exchange, line)
    }
}

impl Default for SimulatedFacilityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FacilityProvider for SimulatedFacilityProvider {
    fn find_nearby(&mut self, position: &Position, category: FacilityCategory) -> Vec<Facility> {
        let info = catalog::info(category);
        let count = info.result_count();
        let (min_distance, max_distance) = info.distance_range_m;

        let mut facilities = Vec::with_capacity(count);

        for name in info.name_pool.iter().take(count) {
            let distance = self.rng.gen_range(min_distance..max_distance);
            let bearing = self.rng.gen_range(0.0..360.0);
            let (lat, lng) = position.project(distance, bearing);

            facilities.push(Facility {
                id: FacilityId::new(),
                name: (*name).to_string(),
                address: self.generate_address(),
                distance_m: distance.round() as u32,
                category,
                phone: self.generate_phone(),
                lat,
                lng,
            });
        }

        // Rank by rounded distance; tie order is unconstrained but the
        // stable sort keeps generation order
        facilities.sort_by_key(|f| f.distance_m);

        debug!(
            category = %category,
            count = facilities.len(),
            "Generated facility list"
        );

        facilities
    }
}
