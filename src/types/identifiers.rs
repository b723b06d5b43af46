//! Unique identifier types for the facility finder
//!
//! This module contains the UUID-based identifier assigned to every
//! generated facility record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a generated facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacilityId(pub Uuid);

impl FacilityId {
    /// Create a new random facility ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FacilityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FAC_{}", self.0.simple())
    }
}

impl Serialize for FacilityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("FAC_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for FacilityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("FAC_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(FacilityId(uuid))
        } else {
            // Fallback: accept a raw UUID
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(FacilityId(uuid))
        }
    }
}
