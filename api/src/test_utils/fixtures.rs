//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Notification, NotificationId, OwnerId, Patient};

/// Create a test notification with the given id and owner
pub fn test_notification(id: i64, owner_id: i64) -> Notification {
    Notification {
        id: NotificationId(id),
        owner_id: OwnerId(owner_id),
        message: format!("Message {}", id),
        delivery_time: Utc.with_ymd_and_hms(2025, 3, 2, 12, 32, 0).unwrap(),
    }
}

/// Two notifications, both owned by user 1
pub fn test_notifications() -> Vec<Notification> {
    vec![
        test_notification(1, 1),
        Notification {
            delivery_time: Utc.with_ymd_and_hms(2025, 5, 1, 23, 59, 30).unwrap(),
            ..test_notification(2, 1)
        },
    ]
}

/// Create a test patient for the given owner
pub fn test_patient(owner_id: i64) -> Patient {
    Patient {
        owner_id: OwnerId(owner_id),
        blood_type: "A-".to_string(),
        emergency_contact: "Dad".to_string(),
        allergies: "cats, dogs".to_string(),
        weight: 92.6,
        height: 199.0,
    }
}

/// Two patients with owners 1 and 2
pub fn test_patients() -> Vec<Patient> {
    vec![
        Patient {
            owner_id: OwnerId(1),
            blood_type: "AB+".to_string(),
            emergency_contact: "Mom".to_string(),
            allergies: "cats, dogs".to_string(),
            weight: 72.6,
            height: 167.0,
        },
        test_patient(2),
    ]
}
