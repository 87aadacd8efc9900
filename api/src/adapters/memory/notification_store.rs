//! In-memory adapter for NotificationStore

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Notification, NotificationId, OwnerId};
use crate::domain::ports::NotificationStore;
use crate::error::DomainError;

/// In-memory implementation of NotificationStore
#[derive(Default)]
pub struct InMemoryNotificationStore {
    notifications: RwLock<BTreeMap<NotificationId, Notification>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a notification for testing
    #[cfg(test)]
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notifications
            .get_mut()
            .insert(notification.id, notification);
        self
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn list_all(&self) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications.values().cloned().collect())
    }

    async fn list_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        Ok(notifications
            .values()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn add(&self, mut notification: Notification) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.write().await;

        if notification.id.is_unassigned() {
            let next = match notifications.keys().next_back() {
                Some(last) => last.0.checked_add(1).ok_or_else(|| {
                    DomainError::Internal("Notification id space exhausted".to_string())
                })?,
                None => 1,
            };
            notification.id = NotificationId(next);
        } else if notifications.contains_key(&notification.id) {
            return Err(DomainError::AlreadyExists(format!(
                "Notification {} already exists",
                notification.id
            )));
        }

        notifications.insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn delete(&self, id: NotificationId) -> Result<(), DomainError> {
        let mut notifications = self.notifications.write().await;
        notifications
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Notification {} not found", id)))
    }
}
