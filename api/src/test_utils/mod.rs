//! Test utilities
//!
//! Shared fixtures for unit and router tests. Store fakes come from
//! `mockall::automock` on the port traits (`MockNotificationStore`,
//! `MockPatientStore`) or from the in-memory adapters.

pub mod fixtures;

pub use fixtures::*;
