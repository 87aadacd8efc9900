//! Application layer
//!
//! Endpoints that turn a client operation into one store call and a
//! response shape. Each endpoint is generic over the store it is given.

pub mod notification_endpoint;
pub mod patient_endpoint;
pub mod response;

pub use notification_endpoint::{NotificationEndpoint, NOTIFICATIONS_PATH};
pub use patient_endpoint::{PatientEndpoint, PATIENTS_PATH};
pub use response::EndpointResponse;
