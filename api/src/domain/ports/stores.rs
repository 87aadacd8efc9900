//! Store port traits
//!
//! These traits define the data access the endpoints need.
//! Implementations are provided by adapters (e.g., the in-memory stores).

use async_trait::async_trait;

use crate::domain::entities::{Notification, NotificationId, OwnerId, Patient};
use crate::error::DomainError;

/// Store for Notification entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// List every notification
    async fn list_all(&self) -> Result<Vec<Notification>, DomainError>;

    /// List the notifications addressed to an owner
    async fn list_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Notification>, DomainError>;

    /// Persist a notification, returning it as stored
    async fn add(&self, notification: Notification) -> Result<Notification, DomainError>;

    /// Delete a notification by id
    async fn delete(&self, id: NotificationId) -> Result<(), DomainError>;
}

/// Store for Patient entities, keyed by owner
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// List every patient
    async fn list_all(&self) -> Result<Vec<Patient>, DomainError>;

    /// Find the patient record of an owner
    async fn get_by_owner(&self, owner_id: OwnerId) -> Result<Option<Patient>, DomainError>;

    /// Persist a patient, returning it as stored
    async fn add(&self, patient: Patient) -> Result<Patient, DomainError>;

    /// Delete the patient record of an owner
    async fn delete(&self, owner_id: OwnerId) -> Result<(), DomainError>;
}
