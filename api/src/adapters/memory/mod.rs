//! In-memory adapters
//!
//! Store implementations backed by ordered maps behind an async `RwLock`.
//! Data lives for the lifetime of the process.

pub mod notification_store;
pub mod patient_store;

pub use notification_store::InMemoryNotificationStore;
pub use patient_store::InMemoryPatientStore;
