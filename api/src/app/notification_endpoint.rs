//! Notification endpoint
//!
//! Maps notification operations onto a single store call each.

use std::sync::Arc;

use crate::app::EndpointResponse;
use crate::domain::entities::{Notification, NotificationId, OwnerId};
use crate::domain::ports::NotificationStore;
use crate::error::AppError;

/// Base path notifications are mounted under
pub const NOTIFICATIONS_PATH: &str = "/api/notifications";

/// Endpoint for notifications
pub struct NotificationEndpoint<NS>
where
    NS: NotificationStore,
{
    store: Arc<NS>,
}

impl<NS> NotificationEndpoint<NS>
where
    NS: NotificationStore,
{
    pub fn new(store: Arc<NS>) -> Self {
        Self { store }
    }

    /// List every notification
    pub async fn list_all(&self) -> Result<EndpointResponse<Vec<Notification>>, AppError> {
        let notifications = self.store.list_all().await?;
        tracing::debug!(count = notifications.len(), "Listed notifications");
        Ok(EndpointResponse::Ok(notifications))
    }

    /// List the notifications of one owner
    ///
    /// An unknown owner yields an empty list, not an error.
    pub async fn list_by_owner(
        &self,
        owner_id: OwnerId,
    ) -> Result<EndpointResponse<Vec<Notification>>, AppError> {
        let notifications = self.store.list_by_owner(owner_id).await?;
        tracing::debug!(
            owner_id = %owner_id,
            count = notifications.len(),
            "Listed notifications by owner"
        );
        Ok(EndpointResponse::Ok(notifications))
    }

    /// Create a notification
    pub async fn create(
        &self,
        notification: Notification,
    ) -> Result<EndpointResponse<Notification>, AppError> {
        notification.validate()?;

        let created = self.store.add(notification).await?;
        tracing::info!(
            "Created notification {} for owner {}",
            created.id,
            created.owner_id
        );

        Ok(EndpointResponse::Created {
            location: format!("{}/{}", NOTIFICATIONS_PATH, created.id),
            body: created,
        })
    }

    /// Delete a notification
    pub async fn delete(&self, id: NotificationId) -> Result<EndpointResponse<()>, AppError> {
        self.store.delete(id).await?;
        tracing::info!("Deleted notification {}", id);
        Ok(EndpointResponse::NoContent)
    }
}
