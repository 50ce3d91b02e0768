//! HTTP error envelope and taxonomy.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// The generic message shown for any storage or upstream failure.
pub const SERVER_ERROR: &str = "Something went wrong. Please try again later.";

/// Field-keyed validation messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Client-facing error taxonomy.
///
/// Storage and upstream details are logged where they occur and collapse
/// into [`ApiError::Internal`] at this boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failure, rendered as a field-keyed map.
    #[error("validation failed")]
    Validation(FieldErrors),
    /// Malformed request, rendered as a fixed code string.
    #[error("{0}")]
    BadRequest(String),
    /// Any storage or upstream failure.
    #[error("{}", SERVER_ERROR)]
    Internal,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(FieldErrors),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
    code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Validation(fields) => (StatusCode::BAD_REQUEST, ErrorDetail::Fields(fields)),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorDetail::Message(message)),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::Message(SERVER_ERROR.to_owned()),
            ),
        };
        let body = ErrorBody {
            error: detail,
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
