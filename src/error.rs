//! Error types for the spacecraft service
//!
//! Provides unified error handling using thiserror. Store failures are
//! mapped to a fixed generic message at the HTTP boundary; the underlying
//! detail goes to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tokio_rusqlite::rusqlite;
use tracing::error;

// == Service Error Enum ==
/// Unified error type for the spacecraft service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Lookup requested with a negative identifier
    #[error("Spacecraft id must not be negative: {0}")]
    NegativeId(i64),

    /// No spacecraft with this identifier
    #[error("Spacecraft not found with id: {0}")]
    NotFound(i64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Store(tokio_rusqlite::Error),

    /// Schema migration failed to apply
    #[error("Migration failed: {0}")]
    Migration(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::NegativeId(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ServiceError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServiceError::Store(_) | ServiceError::Migration(_) => {
                // Clients get a fixed message; the detail stays in the log.
                error!("Store failure: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Conversions From tokio-rusqlite ==
impl From<tokio_rusqlite::Error<ServiceError>> for ServiceError {
    fn from(err: tokio_rusqlite::Error<ServiceError>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => {
                ServiceError::Store(tokio_rusqlite::Error::ConnectionClosed)
            }
            tokio_rusqlite::Error::Close(c) => ServiceError::Store(tokio_rusqlite::Error::Close(c)),
            _ => ServiceError::Store(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for ServiceError {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        ServiceError::Store(err)
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(err: rusqlite::Error) -> Self {
        ServiceError::Store(tokio_rusqlite::Error::Error(err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the spacecraft service.
pub type Result<T> = std::result::Result<T, ServiceError>;
