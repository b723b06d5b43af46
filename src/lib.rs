//! Clinic Finder
//!
//! A simulated nearby medical-facility locator that synthesizes a bounded,
//! distance-ranked list of fake facilities around a geographic position.
//!
//! # Overview
//!
//! This library models the full lifecycle of a "find clinics near me"
//! search: acquiring a position (real coordinates or a simulated
//! geolocation source), generating plausible facilities for a chosen
//! category, ranking them by distance, and presenting the results with
//! map-directions and phone deep links.
//!
//! ## Key Features
//!
//! - **Category Catalog**: 11 facility categories with display metadata,
//!   curated name pools, and per-category distance and result policies
//! - **Simulated Generation**: Seedable facility synthesis with realistic
//!   addresses, phone numbers, and projected coordinates
//! - **Distance Ranking**: Results sorted ascending by rounded distance
//! - **Geolocation Interface**: Provider trait with a simulated source,
//!   caching, and the standard permission/availability/timeout failures
//! - **Search Coordination**: Generation-tagged search rounds so stale
//!   results never overwrite newer ones
//! - **Flexible Output**: Text, JSON, and CSV rendering plus deep links
//!
//! ## Quick Start
//!
//! ```rust
//! use clinic_finder::facility::{FacilityProvider, SimulatedFacilityProvider};
//! use clinic_finder::geo::Position;
//! use clinic_finder::types::FacilityCategory;
//!
//! let mut provider = SimulatedFacilityProvider::with_seed(42);
//! let position = Position::new(37.5665, 126.9780);
//! let facilities = provider.find_nearby(&position, FacilityCategory::Dental);
//!
//! assert_eq!(facilities.len(), 10);
//! println!("nearest: {} ({})", facilities[0].name, facilities[0].distance_display());
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core enums, identifiers, and configuration
//! - [`geo`]: Positions, coordinate projection, and geolocation providers
//! - [`facility`]: The category catalog, facility records, and generation
//! - [`search`]: Search state, coordination, errors, and logging
//! - [`output`]: Deep links and result rendering
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod geo;
pub mod output;
pub mod search;

pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Enums
    FacilityCategory,
    // Identifiers
    FacilityId,
    OutputFormat,
    // Configuration
    SearchConfig,
};

// Positions and geolocation
pub use geo::{
    GeolocationError, GeolocationOptions, GeolocationProvider, Position, SimulatedGeolocation,
};

// Facility types and generation
pub use facility::{CategoryInfo, Facility, FacilityProvider, SimulatedFacilityProvider};

// Search orchestration
pub use search::{
    LocatorError, LocatorResult, LoggingConfig, SearchCoordinator, SearchState, SearchTicket,
};

// Presentation
pub use output::FacilityLinks;
