//! Notification handlers
//!
//! Thin axum wrappers around `NotificationEndpoint`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{delete, get},
    Json, Router,
};

use crate::app::{EndpointResponse, NotificationEndpoint};
use crate::domain::entities::Notification;
use crate::domain::ports::NotificationStore;
use crate::error::AppError;

type EndpointState<NS> = State<Arc<NotificationEndpoint<NS>>>;

/// Routes relative to the notifications base path
pub fn routes<NS>(endpoint: Arc<NotificationEndpoint<NS>>) -> Router
where
    NS: NotificationStore + 'static,
{
    Router::new()
        .route(
            "/",
            get(list_notifications::<NS>).post(create_notification::<NS>),
        )
        .route("/owner/:owner_id", get(list_notifications_by_owner::<NS>))
        .route("/:id", delete(delete_notification::<NS>))
        .with_state(endpoint)
}

/// GET /api/notifications
pub async fn list_notifications<NS: NotificationStore + 'static>(
    State(endpoint): EndpointState<NS>,
) -> Result<EndpointResponse<Vec<Notification>>, AppError> {
    endpoint.list_all().await
}

/// GET /api/notifications/owner/:owner_id
pub async fn list_notifications_by_owner<NS: NotificationStore + 'static>(
    State(endpoint): EndpointState<NS>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<EndpointResponse<Vec<Notification>>, AppError> {
    let Path(owner_id) = path?;
    endpoint.list_by_owner(owner_id.into()).await
}

/// POST /api/notifications
pub async fn create_notification<NS: NotificationStore + 'static>(
    State(endpoint): EndpointState<NS>,
    payload: Result<Json<Notification>, JsonRejection>,
) -> Result<EndpointResponse<Notification>, AppError> {
    let Json(notification) = payload?;
    endpoint.create(notification).await
}

/// DELETE /api/notifications/:id
pub async fn delete_notification<NS: NotificationStore + 'static>(
    State(endpoint): EndpointState<NS>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<EndpointResponse<()>, AppError> {
    let Path(id) = path?;
    endpoint.delete(id.into()).await
}
