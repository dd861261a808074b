//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and JSON bodies. Model, parse and
//! filesystem failures all collapse into a 500 carrying the message; only a
//! missing document is reported distinctly, as a 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sumdoc_core::{CoreError, StorageError};
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    status: u16,
    detail: &'a str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", message);
        }

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            detail: message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Storage(StorageError::NotFound(name)) => {
                Self::NotFound(format!("File not found: {name}"))
            }
            CoreError::Validation(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumdoc_core::{GenerationError, ParseError};

    #[test]
    fn pipeline_failures_are_internal() {
        let errors = [
            CoreError::Generation(GenerationError::Spawn("no such file".into())),
            CoreError::Parse(ParseError::UnexpectedFormat),
            CoreError::Storage(StorageError::Io("disk full".into())),
        ];
        for err in errors {
            assert_eq!(
                HttpError::from(err).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn missing_document_is_not_found() {
        let err = HttpError::from(CoreError::Storage(StorageError::NotFound("x.docx".into())));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "File not found: x.docx");
    }

    #[test]
    fn internal_message_keeps_the_cause() {
        let err = HttpError::from(CoreError::Parse(ParseError::UnexpectedFormat));
        assert_eq!(err.message(), "Unexpected output format from the model");
    }
}
