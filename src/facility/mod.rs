//! Facility records, category catalog, and the simulated provider
//!
//! # Overview
//!
//! - **Record**: the generated [`Facility`] the presentation layer renders
//! - **Catalog**: per-category display metadata, name pools, and policies
//! - **Provider**: the [`FacilityProvider`] capability and its simulated
//!   implementation
//!
//! # Usage Example
//!
//! ```rust
//! use clinic_finder::facility::{FacilityProvider, SimulatedFacilityProvider};
//! use clinic_finder::geo::Position;
//! use clinic_finder::types::FacilityCategory;
//!
//! let mut provider = SimulatedFacilityProvider::with_seed(7);
//! let position = Position::new(37.5665, 126.9780);
//! let facilities = provider.find_nearby(&position, FacilityCategory::Pharmacy);
//!
//! assert_eq!(facilities.len(), 10);
//! assert!(facilities.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));
//! ```

pub mod catalog;
pub mod generator;
pub mod provider;
pub mod record;

// Re-export all public types for convenience
pub use catalog::CategoryInfo;
pub use generator::SimulatedFacilityProvider;
pub use provider::FacilityProvider;
pub use record::Facility;
