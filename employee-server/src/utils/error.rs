//! Unified error handling
//!
//! [`AppError`] is the single error type that crosses the handler boundary.
//! Every variant maps to exactly one HTTP status and message template, and
//! every failed request renders the same JSON envelope:
//!
//! ```json
//! {
//!   "errorMessage": "Could not find employee with id: 11",
//!   "status": "NOT_FOUND",
//!   "timestamp": "2026-08-07T10:15:30Z"
//! }
//! ```
//!
//! | variant | status |
//! |---------|--------|
//! | [`AppError::NotFound`] | 404 |
//! | [`AppError::MalformedBody`] | 400 |
//! | [`AppError::Validation`] | 406 |
//! | [`AppError::UnsupportedMediaType`] | 406 |
//! | [`AppError::Database`] / [`AppError::Internal`] | 500 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};

use crate::db::repository::RepoError;
use crate::utils::validation::Violation;

/// Application-level Result type used in HTTP handlers and services
pub type AppResult<T> = Result<T, AppError>;

/// Application error enumeration
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No employee row for the requested id (404)
    #[error("Could not find employee with id: {0}")]
    NotFound(i64),

    /// Request body could not be parsed as an employee (400)
    #[error("JSON Parse exception. Details: {0}")]
    MalformedBody(String),

    /// A field constraint failed; carries the first violation (406)
    #[error("Invalid Parameter value. Details: {0}")]
    Validation(Violation),

    /// Request content type is not application/json (406)
    #[error("Invalid MediaType. Details: {0}")]
    UnsupportedMediaType(String),

    /// Storage layer failure (500)
    #[error("{0}")]
    Database(String),

    /// Anything else that escaped the taxonomy above (500)
    #[error("{0}")]
    Internal(String),
}

/// Error envelope returned for every failed request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    /// Human-readable message; null when the source error carried none
    pub error_message: Option<String>,
    /// HTTP status constant name, e.g. `NOT_FOUND`
    pub status: &'static str,
    /// When the error was rendered, not when it originally occurred
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, status_name) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Validation(_) | AppError::UnsupportedMediaType(_) => {
                (StatusCode::NOT_ACCEPTABLE, "NOT_ACCEPTABLE")
            }
            AppError::Database(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        };

        let message = self.to_string();
        if status.is_server_error() {
            error!(target: "internal", error = %message, "Request failed");
        } else {
            warn!(error = %message, "Request rejected");
        }

        let body = Json(ErrorMessage {
            error_message: Some(message),
            status: status_name,
            timestamp: Utc::now(),
        });

        (status, body).into_response()
    }
}

impl From<Violation> for AppError {
    fn from(violation: Violation) -> Self {
        AppError::Validation(violation)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(err) => {
                AppError::UnsupportedMediaType(err.body_text())
            }
            err => AppError::MalformedBody(err.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_envelope() {
        let (status, body) = render(AppError::NotFound(11)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorMessage"], "Could not find employee with id: 11");
        assert_eq!(body["status"], "NOT_FOUND");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn validation_uses_field_dash_message_format() {
        let err = AppError::Validation(Violation::new(
            "salary",
            "must be greater than or equal to 1",
        ));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            body["errorMessage"],
            "Invalid Parameter value. Details: salary- must be greater than or equal to 1"
        );
        assert_eq!(body["status"], "NOT_ACCEPTABLE");
    }

    #[tokio::test]
    async fn malformed_body_maps_to_400() {
        let (status, body) = render(AppError::MalformedBody("boom".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorMessage"], "JSON Parse exception. Details: boom");
        assert_eq!(body["status"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unsupported_media_type_maps_to_406() {
        let (status, body) = render(AppError::UnsupportedMediaType("boom".into())).await;
        assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
        assert_eq!(body["errorMessage"], "Invalid MediaType. Details: boom");
        assert_eq!(body["status"], "NOT_ACCEPTABLE");
    }

    #[tokio::test]
    async fn unexpected_errors_surface_raw_text() {
        let (status, body) = render(AppError::Database("no such table: employee".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["errorMessage"], "no such table: employee");
        assert_eq!(body["status"], "INTERNAL_SERVER_ERROR");
    }
}
