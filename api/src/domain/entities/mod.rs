//! Domain entities
//!
//! Plain data types for notifications and patients, with the minimal
//! validation applied before anything reaches a store.

pub mod notification;
pub mod patient;

pub use notification::{Notification, NotificationId, OwnerId};
pub use patient::Patient;
