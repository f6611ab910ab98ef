//! Wire-level error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

const ERROR_CODE_SUBJECT_NOT_FOUND: i32 = 40401;
const ERROR_CODE_SCHEMA_NOT_FOUND: i32 = 40403;
const ERROR_CODE_INTERNAL: i32 = 50001;

/// A structured registry error: HTTP status plus the protocol's error body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: i32,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 404 with the subject-not-found code, for subject+version lookups.
    pub fn subject_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ERROR_CODE_SUBJECT_NOT_FOUND,
            "subject not found",
        )
    }

    /// 404 with the schema-not-found code, for id lookups.
    pub fn schema_not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ERROR_CODE_SCHEMA_NOT_FOUND,
            "schema not found",
        )
    }

    /// 500 with the generic internal code.
    ///
    /// The protocol has no distinct bad-request class: malformed numeric
    /// path segments and undecodable bodies land here, exactly as existing
    /// callers expect.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ERROR_CODE_INTERNAL, message)
    }
}

/// Error body shape shared by every structured failure.
#[derive(Serialize)]
struct ErrorBody {
    error_code: i32,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error_code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
