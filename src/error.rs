//! Unified error types for the task API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::responses::ErrorBody;
use crate::metrics;

/// Top-level error for startup and CLI commands.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Task store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reading or writing the persisted task collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read, created or replaced.
    #[error("task file io failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not hold a JSON array of tasks.
    #[error("task file is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// No id is left above the largest stored one.
    #[error("no task id available after {0}")]
    IdsExhausted(i64),

    /// Injected failure from the in-memory store.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Request-level failure, rendered as `{success: false, message}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad or missing input. Detected before any storage access.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Lookup miss after a successful load.
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage failure. Only `message` is returned to the caller.
    #[error("{message}: {source}")]
    Storage {
        /// Generic message shown to the caller.
        message: &'static str,
        /// Underlying cause, logged server-side.
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure with the caller-facing message for an operation.
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        Self::Storage { message, source }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(message) => {
                metrics::inc_validation_failures();
                message
            }
            Self::NotFound(message) => message,
            Self::Storage { message, source } => {
                error!(error = %source, "{}", message);
                metrics::inc_storage_failures();
                message.to_string()
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ApiError::Validation("Title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Task not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        let storage = ApiError::storage(
            "Error reading tasks",
            StoreError::Unavailable("disk gone".into()),
        );
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_display_keeps_cause_for_logs() {
        let err = ApiError::storage(
            "Error saving task",
            StoreError::Unavailable("disk gone".into()),
        );
        assert_eq!(err.to_string(), "Error saving task: store unavailable: disk gone");
    }
}
