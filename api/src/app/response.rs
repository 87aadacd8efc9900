//! Endpoint response shape
//!
//! What an endpoint hands back on success. Kept separate from the axum
//! `Response` so callers and tests can inspect the outcome before it is
//! rendered.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Successful outcome of an endpoint operation
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointResponse<T> {
    /// 200 with a body
    Ok(T),
    /// 201 with a `Location` reference to the new resource
    Created { location: String, body: T },
    /// 204 with an empty body
    NoContent,
}

impl<T> EndpointResponse<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            EndpointResponse::Ok(_) => StatusCode::OK,
            EndpointResponse::Created { .. } => StatusCode::CREATED,
            EndpointResponse::NoContent => StatusCode::NO_CONTENT,
        }
    }
}

#[cfg(test)]
impl<T> EndpointResponse<T> {
    pub fn body(&self) -> Option<&T> {
        match self {
            EndpointResponse::Ok(body) | EndpointResponse::Created { body, .. } => Some(body),
            EndpointResponse::NoContent => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            EndpointResponse::Created { location, .. } => Some(location),
            _ => None,
        }
    }
}

impl<T: Serialize> IntoResponse for EndpointResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            EndpointResponse::Ok(body) => (status, Json(body)).into_response(),
            EndpointResponse::Created { location, body } => {
                (status, [(header::LOCATION, location)], Json(body)).into_response()
            }
            EndpointResponse::NoContent => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_sets_location_header() {
        let response = EndpointResponse::Created {
            location: "/api/patients/2".to_string(),
            body: serde_json::json!({"ownerId": 2}),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/patients/2"
        );
    }

    #[tokio::test]
    async fn no_content_has_empty_body() {
        let response = EndpointResponse::<()>::NoContent.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn ok_serializes_empty_sequence() {
        let response = EndpointResponse::Ok(Vec::<u32>::new()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"[]");
    }

    #[test]
    fn accessors_reflect_variant() {
        let created = EndpointResponse::Created {
            location: "/x/1".to_string(),
            body: 1,
        };
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(created.body(), Some(&1));
        assert_eq!(created.location(), Some("/x/1"));

        let empty = EndpointResponse::<i32>::NoContent;
        assert_eq!(empty.body(), None);
        assert_eq!(empty.location(), None);
    }
}
