//! Domain ports (traits)
//!
//! Port traits define the stores the endpoints require.
//! Adapters provide concrete implementations of these traits.

pub mod stores;

pub use stores::{NotificationStore, PatientStore};

#[cfg(test)]
pub use stores::{MockNotificationStore, MockPatientStore};
