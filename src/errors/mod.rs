use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by the tournament operations and surfaced by the API.
///
/// The `detail` messages are part of the wire contract: clients match on
/// them, so they are produced here and passed through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    CapacityExceeded(String),

    #[error("{0}")]
    DuplicateEntry(String),

    #[error("{0}")]
    InvalidOperation(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}

/// True when the error chain bottoms out in a SQLite uniqueness/constraint
/// violation. Lost read-then-write races surface here and are reported the
/// same way as a sequential duplicate.
pub fn is_constraint_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<rusqlite::Error>()
        .and_then(|e| e.sqlite_error_code())
        .map(|code| code == rusqlite::ErrorCode::ConstraintViolation)
        .unwrap_or(false)
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ServiceError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            ServiceError::Validation(m)
            | ServiceError::CapacityExceeded(m)
            | ServiceError::DuplicateEntry(m)
            | ServiceError::InvalidOperation(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServiceError::Storage(e) => {
                log::error!("Storage error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
