//! Error body shared by every endpoint and the mapping from domain errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// Status code for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::IdMismatch => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound | ErrorCode::DocumentNodeNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyExists => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a domain error as a JSON response.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = status_for(err.code);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Internal error: {}", err);
    }
    (status, Json(ErrorResponse::from(&err))).into_response()
}

/// Renders a 400 with the given message.
pub fn bad_request_response(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Policy", "pol-9");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("Policy"));
        assert!(error.message.contains("pol-9"));
    }

    #[test]
    fn domain_error_keeps_code_and_details() {
        let err = DomainError::not_found("Site", "site-9");
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.details.unwrap()["id"], "site-9");
    }

    #[test]
    fn maps_codes_to_status() {
        assert_eq!(status_for(ErrorCode::OutOfRange), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::IdMismatch), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::DocumentNodeNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::AlreadyExists), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_error_response_sets_status() {
        let response = domain_error_response(DomainError::already_exists("Goal", "goal-1"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
