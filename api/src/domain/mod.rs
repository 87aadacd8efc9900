//! Domain layer
//!
//! Contains the entities and the store ports the endpoints depend on.
//! - `entities`: Notification and patient models
//! - `ports`: Trait definitions for the stores supplied by the caller

pub mod entities;
pub mod ports;
