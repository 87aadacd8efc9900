//! Patient handlers
//!
//! Thin axum wrappers around `PatientEndpoint`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::get,
    Json, Router,
};

use crate::app::{EndpointResponse, PatientEndpoint};
use crate::domain::entities::Patient;
use crate::domain::ports::PatientStore;
use crate::error::AppError;

type EndpointState<PS> = State<Arc<PatientEndpoint<PS>>>;

/// Routes relative to the patients base path
pub fn routes<PS>(endpoint: Arc<PatientEndpoint<PS>>) -> Router
where
    PS: PatientStore + 'static,
{
    Router::new()
        .route("/", get(list_patients::<PS>).post(create_patient::<PS>))
        .route(
            "/:owner_id",
            get(get_patient::<PS>).delete(delete_patient::<PS>),
        )
        .with_state(endpoint)
}

/// GET /api/patients
pub async fn list_patients<PS: PatientStore + 'static>(
    State(endpoint): EndpointState<PS>,
) -> Result<EndpointResponse<Vec<Patient>>, AppError> {
    endpoint.list_all().await
}

/// GET /api/patients/:owner_id
pub async fn get_patient<PS: PatientStore + 'static>(
    State(endpoint): EndpointState<PS>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<EndpointResponse<Patient>, AppError> {
    let Path(owner_id) = path?;
    endpoint.get_by_owner(owner_id.into()).await
}

/// POST /api/patients
pub async fn create_patient<PS: PatientStore + 'static>(
    State(endpoint): EndpointState<PS>,
    payload: Result<Json<Patient>, JsonRejection>,
) -> Result<EndpointResponse<Patient>, AppError> {
    let Json(patient) = payload?;
    endpoint.create(patient).await
}

/// DELETE /api/patients/:owner_id
pub async fn delete_patient<PS: PatientStore + 'static>(
    State(endpoint): EndpointState<PS>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<EndpointResponse<()>, AppError> {
    let Path(owner_id) = path?;
    endpoint.delete(owner_id.into()).await
}
