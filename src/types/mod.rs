//! Core types and identifiers for the facility finder
//!
//! This module contains fundamental types, identifiers, and configuration
//! structures used throughout the search system.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based unique identifiers for facility records
//! - **Enums**: Type-safe facility categories and output formats
//! - **Configuration**: Search configuration with validation and CLI support

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
