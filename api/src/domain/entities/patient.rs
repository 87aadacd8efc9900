//! Patient domain entity
//!
//! Medical profile of a user, keyed by the owning user's id.

use serde::{Deserialize, Serialize};

use super::OwnerId;
use crate::error::DomainError;

/// ABO/Rh blood groups accepted on a patient record
pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// A patient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub owner_id: OwnerId,
    pub blood_type: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub allergies: String,
    pub weight: f64,
    pub height: f64,
}

impl Patient {
    /// Reject obviously malformed input before it reaches a store
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.owner_id.0 < 0 {
            return Err(DomainError::Validation(format!(
                "Owner id must not be negative, got {}",
                self.owner_id
            )));
        }

        let blood_type = self.blood_type.trim().to_uppercase();
        if !BLOOD_TYPES.contains(&blood_type.as_str()) {
            return Err(DomainError::Validation(format!(
                "Unknown blood type: {}",
                self.blood_type
            )));
        }

        for (field, value) in [("weight", self.weight), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::Validation(format!(
                    "{} must be a positive number, got {}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}
