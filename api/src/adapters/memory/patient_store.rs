//! In-memory adapter for PatientStore

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{OwnerId, Patient};
use crate::domain::ports::PatientStore;
use crate::error::DomainError;

/// In-memory implementation of PatientStore
#[derive(Default)]
pub struct InMemoryPatientStore {
    patients: RwLock<BTreeMap<OwnerId, Patient>>,
}

impl InMemoryPatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a patient for testing
    #[cfg(test)]
    pub fn with_patient(mut self, patient: Patient) -> Self {
        self.patients.get_mut().insert(patient.owner_id, patient);
        self
    }
}

#[async_trait]
impl PatientStore for InMemoryPatientStore {
    async fn list_all(&self) -> Result<Vec<Patient>, DomainError> {
        let patients = self.patients.read().await;
        Ok(patients.values().cloned().collect())
    }

    async fn get_by_owner(&self, owner_id: OwnerId) -> Result<Option<Patient>, DomainError> {
        let patients = self.patients.read().await;
        Ok(patients.get(&owner_id).cloned())
    }

    async fn add(&self, mut patient: Patient) -> Result<Patient, DomainError> {
        let mut patients = self.patients.write().await;

        // Owner 0 means the caller left the key for us to pick
        if patient.owner_id.0 == 0 {
            let next = match patients.keys().next_back() {
                Some(last) => last.0.checked_add(1).ok_or_else(|| {
                    DomainError::Internal("Patient id space exhausted".to_string())
                })?,
                None => 1,
            };
            patient.owner_id = OwnerId(next);
        } else if patients.contains_key(&patient.owner_id) {
            return Err(DomainError::AlreadyExists(format!(
                "Patient record for owner {} already exists",
                patient.owner_id
            )));
        }

        patients.insert(patient.owner_id, patient.clone());
        Ok(patient)
    }

    async fn delete(&self, owner_id: OwnerId) -> Result<(), DomainError> {
        let mut patients = self.patients.write().await;
        patients
            .remove(&owner_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Patient {} not found", owner_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_patient;

    #[tokio::test]
    async fn get_by_owner_returns_none_when_absent() {
        let store = InMemoryPatientStore::new().with_patient(test_patient(1));

        assert!(store.get_by_owner(OwnerId(1)).await.unwrap().is_some());
        assert!(store.get_by_owner(OwnerId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_assigns_owner_when_zero() {
        let store = InMemoryPatientStore::new().with_patient(test_patient(3));

        let created = store.add(test_patient(0)).await.unwrap();

        assert_eq!(created.owner_id, OwnerId(4));
    }

    #[tokio::test]
    async fn add_duplicate_owner_fails() {
        let store = InMemoryPatientStore::new().with_patient(test_patient(2));

        let result = store.add(test_patient(2)).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_owner() {
        let store = InMemoryPatientStore::new()
            .with_patient(test_patient(2))
            .with_patient(test_patient(1));

        let owners: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.owner_id)
            .collect();

        assert_eq!(owners, vec![OwnerId(1), OwnerId(2)]);
    }

    #[tokio::test]
    async fn add_after_max_owner_fails_without_overflow() {
        let store = InMemoryPatientStore::new().with_patient(test_patient(i64::MAX));

        let result = store.add(test_patient(0)).await;

        assert!(matches!(result, Err(DomainError::Internal(_))));
        let owners: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.owner_id)
            .collect();
        assert_eq!(owners, vec![OwnerId(i64::MAX)]);
    }

    #[tokio::test]
    async fn delete_missing_patient_is_not_found() {
        let store = InMemoryPatientStore::new();
        let result = store.delete(OwnerId(1)).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
