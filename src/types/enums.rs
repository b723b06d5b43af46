//! Enumeration types for the facility finder
//!
//! This module contains the facility category filter and the output format
//! selection used throughout the search system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of medical facilities that can be searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityCategory {
    /// Internal medicine clinics (default filter)
    InternalMedicine,
    /// Orthopedic clinics
    Orthopedic,
    /// Dental clinics
    Dental,
    /// Ear, nose and throat clinics
    Ent,
    /// Eye clinics
    Ophthalmology,
    /// Pediatric clinics
    Pediatric,
    /// Obstetrics and gynecology clinics
    Gynecology,
    /// Dermatology clinics
    Dermatology,
    /// Neurology clinics
    Neurology,
    /// Large general hospitals
    GeneralHospital,
    /// Pharmacies
    Pharmacy,
}

impl FacilityCategory {
    /// All categories in declaration order
    pub const ALL: [FacilityCategory; 11] = [
        FacilityCategory::InternalMedicine,
        FacilityCategory::Orthopedic,
        FacilityCategory::Dental,
        FacilityCategory::Ent,
        FacilityCategory::Ophthalmology,
        FacilityCategory::Pediatric,
        FacilityCategory::Gynecology,
        FacilityCategory::Dermatology,
        FacilityCategory::Neurology,
        FacilityCategory::GeneralHospital,
        FacilityCategory::Pharmacy,
    ];

    /// Parse a category token, falling back to internal medicine for
    /// unrecognized input.
    ///
    /// This is an explicit defaulting policy rather than an error: an
    /// unknown filter selects the internal medicine dataset and count
    /// policy.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(token = s, "Unknown facility category, using internal medicine");
            FacilityCategory::InternalMedicine
        })
    }
}

impl Default for FacilityCategory {
    fn default() -> Self {
        FacilityCategory::InternalMedicine
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityCategory::InternalMedicine => write!(f, "internal_medicine"),
            FacilityCategory::Orthopedic => write!(f, "orthopedic"),
            FacilityCategory::Dental => write!(f, "dental"),
            FacilityCategory::Ent => write!(f, "ent"),
            FacilityCategory::Ophthalmology => write!(f, "ophthalmology"),
            FacilityCategory::Pediatric => write!(f, "pediatric"),
            FacilityCategory::Gynecology => write!(f, "gynecology"),
            FacilityCategory::Dermatology => write!(f, "dermatology"),
            FacilityCategory::Neurology => write!(f, "neurology"),
            FacilityCategory::GeneralHospital => write!(f, "general_hospital"),
            FacilityCategory::Pharmacy => write!(f, "pharmacy"),
        }
    }
}

impl FromStr for FacilityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "internal" | "internal_medicine" => Ok(FacilityCategory::InternalMedicine),
            "orthopedic" => Ok(FacilityCategory::Orthopedic),
            "dental" => Ok(FacilityCategory::Dental),
            "ent" => Ok(FacilityCategory::Ent),
            "ophthalmology" => Ok(FacilityCategory::Ophthalmology),
            "pediatric" => Ok(FacilityCategory::Pediatric),
            "gynecology" => Ok(FacilityCategory::Gynecology),
            "dermatology" => Ok(FacilityCategory::Dermatology),
            "neurology" => Ok(FacilityCategory::Neurology),
            "general_hospital" => Ok(FacilityCategory::GeneralHospital),
            "pharmacy" => Ok(FacilityCategory::Pharmacy),
            _ => Err(format!("Unknown facility category: {}", s)),
        }
    }
}

/// Output format options for rendering search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable facility cards
    Text,
    /// JSON format for structured data
    Json,
    /// CSV format for tabular data
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
