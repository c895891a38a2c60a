//! # API Errors
//!
//! Every failure a handler can return, with its HTTP status. The response
//! body is always `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sl_01_chain_storage::StorageError;
use sl_02_request_mempool::MempoolError;
use thiserror::Error;

/// Client-facing text for every storage failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal storage error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed or missing request data, or a rejected validation step.
    #[error("{0}")]
    InvalidInput(String),

    /// The address holds no access grant.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failure; details are logged, not returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("[sl-04] {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<MempoolError> for ApiError {
    fn from(err: MempoolError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::HeightNotFound { height } => {
                ApiError::NotFound(format!("block # {} does not exist", height))
            }
            other => {
                tracing::error!("[sl-04] Storage failure: {}", other);
                ApiError::Internal(INTERNAL_ERROR_MESSAGE.into())
            }
        }
    }
}
