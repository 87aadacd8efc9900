//! Unified error types for the Clinic API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Store and validation errors raised below the endpoints
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised by stores and entity validation
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Raised by persistence-backed stores; the in-memory adapters never fail this way
    #[allow(dead_code)]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by endpoints and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// HTTP status this error renders as
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::NotFound(_)) | AppError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Domain(DomainError::AlreadyExists(_)) => StatusCode::CONFLICT,
            AppError::Domain(DomainError::Validation(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Domain(DomainError::Database(_))
            | AppError::Domain(DomainError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => ("Not found", Some(msg.clone())),
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                ("Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => {
                ("Validation error", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                ("Internal server error", None)
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal server error", None)
            }
            AppError::BadRequest(msg) => ("Bad request", Some(msg.clone())),
            AppError::NotFound(msg) => ("Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let cases = [
            (DomainError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (DomainError::AlreadyExists("x".into()), StatusCode::CONFLICT),
            (DomainError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                DomainError::Database("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[tokio::test]
    async fn not_found_includes_details() {
        let response = AppError::NotFound("Patient 7 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Not found");
        assert_eq!(json["details"], "Patient 7 not found");
    }

    #[tokio::test]
    async fn database_error_does_not_leak_message() {
        let err = AppError::Domain(DomainError::Database(
            "connection refused at 10.0.0.3:5432".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert!(json.get("details").is_none());
        assert!(!json.to_string().contains("10.0.0.3"));
    }
}
