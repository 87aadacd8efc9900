//! Patient endpoint
//!
//! Maps patient operations onto a single store call each.

use std::sync::Arc;

use crate::app::EndpointResponse;
use crate::domain::entities::{OwnerId, Patient};
use crate::domain::ports::PatientStore;
use crate::error::AppError;

/// Base path patients are mounted under
pub const PATIENTS_PATH: &str = "/api/patients";

/// Endpoint for patient records
pub struct PatientEndpoint<PS>
where
    PS: PatientStore,
{
    store: Arc<PS>,
}

impl<PS> PatientEndpoint<PS>
where
    PS: PatientStore,
{
    pub fn new(store: Arc<PS>) -> Self {
        Self { store }
    }

    /// List every patient
    pub async fn list_all(&self) -> Result<EndpointResponse<Vec<Patient>>, AppError> {
        let patients = self.store.list_all().await?;
        tracing::debug!(count = patients.len(), "Listed patients");
        Ok(EndpointResponse::Ok(patients))
    }

    /// Get the patient record of an owner, 404 when there is none
    pub async fn get_by_owner(
        &self,
        owner_id: OwnerId,
    ) -> Result<EndpointResponse<Patient>, AppError> {
        let patient = self
            .store
            .get_by_owner(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Patient {} not found", owner_id)))?;

        Ok(EndpointResponse::Ok(patient))
    }

    /// Create a patient record
    pub async fn create(&self, patient: Patient) -> Result<EndpointResponse<Patient>, AppError> {
        patient.validate()?;

        let created = self.store.add(patient).await?;
        tracing::info!("Created patient record for owner {}", created.owner_id);

        Ok(EndpointResponse::Created {
            location: format!("{}/{}", PATIENTS_PATH, created.owner_id),
            body: created,
        })
    }

    /// Delete the patient record of an owner
    pub async fn delete(&self, owner_id: OwnerId) -> Result<EndpointResponse<()>, AppError> {
        self.store.delete(owner_id).await?;
        tracing::info!("Deleted patient record for owner {}", owner_id);
        Ok(EndpointResponse::NoContent)
    }
}
