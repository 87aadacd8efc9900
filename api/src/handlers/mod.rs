//! HTTP handlers
//!
//! Axum request handlers and the router that mounts them.

pub mod health;
pub mod notifications;
pub mod patients;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::app::{NotificationEndpoint, PatientEndpoint, NOTIFICATIONS_PATH, PATIENTS_PATH};
use crate::domain::ports::{NotificationStore, PatientStore};

pub use health::health;

/// Build the API router over the given endpoints
///
/// Transport middleware (CORS, tracing, rate limiting) is layered on by the caller.
pub fn router<NS, PS>(
    notification_endpoint: Arc<NotificationEndpoint<NS>>,
    patient_endpoint: Arc<PatientEndpoint<PS>>,
) -> Router
where
    NS: NotificationStore + 'static,
    PS: PatientStore + 'static,
{
    Router::new()
        .route("/health", get(health))
        .nest(NOTIFICATIONS_PATH, notifications::routes(notification_endpoint))
        .nest(PATIENTS_PATH, patients::routes(patient_endpoint))
}
