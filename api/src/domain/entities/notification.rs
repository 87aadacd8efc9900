//! Notification domain entity
//!
//! A message scheduled for delivery to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a notification
///
/// `0` on an incoming notification means the store assigns the id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub i64);

impl NotificationId {
    pub fn is_unassigned(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for NotificationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user that owns a notification or patient record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub i64);

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A notification addressed to an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default)]
    pub id: NotificationId,
    pub owner_id: OwnerId,
    pub message: String,
    pub delivery_time: DateTime<Utc>,
}

impl Notification {
    /// Reject obviously malformed input before it reaches a store
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.0 < 0 {
            return Err(DomainError::Validation(format!(
                "Notification id must not be negative, got {}",
                self.id
            )));
        }
        if self.owner_id.0 <= 0 {
            return Err(DomainError::Validation(format!(
                "Owner id must be positive, got {}",
                self.owner_id
            )));
        }
        if self.message.trim().is_empty() {
            return Err(DomainError::Validation(
                "Message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
