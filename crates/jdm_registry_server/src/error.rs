//! HTTP error mapping.
//!
//! # Invariants
//! - Storage causes are logged, never written to the response body.
//! - Every error body is a fixed, newline-terminated text line.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jdm_registry_core::PartServiceError;
use log::error;

/// Collection operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "part_list",
            Self::Create => "part_create",
            Self::Update => "part_update",
            Self::Delete => "part_delete",
        }
    }

    fn failure_body(self) -> &'static str {
        match self {
            Self::List => "Internal error",
            Self::Create => "DB error",
            Self::Update => "Update failed",
            Self::Delete => "Delete failed",
        }
    }
}

/// Request-level failure rendered as a plain-text response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Required query parameter absent or blank.
    MissingParams,
    /// `id` present but not an integer.
    InvalidId(String),
    NotFound,
    MethodNotAllowed,
    /// Store failure; the cause has already been logged.
    Storage(Operation),
}

impl ApiError {
    /// Maps a service failure for `operation`, logging storage causes.
    pub fn from_service(operation: Operation, err: PartServiceError) -> Self {
        match err {
            PartServiceError::Validation(_) => Self::MissingParams,
            PartServiceError::NotFound(_) => Self::NotFound,
            PartServiceError::Repo(cause) => {
                error!(
                    "event={} module=http status=error error_code=storage_failed error={}",
                    operation.as_str(),
                    cause
                );
                Self::Storage(operation)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParams | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Self::MissingParams => "Missing params",
            Self::InvalidId(_) => "Invalid id",
            Self::NotFound => "Item not found",
            Self::MethodNotAllowed => "Unknown method",
            Self::Storage(operation) => operation.failure_body(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), format!("{}\n", self.body())).into_response()
    }
}
