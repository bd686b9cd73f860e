//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid database url: {0}")]
    DatabaseUrl(String),
}

/// Persistence operation that failed; rendered as the gerund in error bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageOp {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageOp::Create => "creating",
            StorageOp::Read => "reading",
            StorageOp::Update => "updating",
            StorageOp::Delete => "deleting",
        })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid id")]
    InvalidId,
    #[error("validation: {0}")]
    Validation(String),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,
    /// Carries the display label of the resource, e.g. "Patient".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("error {op} {resource}: {source}")]
    Storage {
        op: StorageOp,
        resource: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// Statement ran but matched no row.
    #[error("error {op} {resource}: no rows affected")]
    NotApplied { op: StorageOp, resource: &'static str },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("internal error")]
    Internal,
}

impl AppError {
    pub fn storage(op: StorageOp, resource: &'static str, source: sqlx::Error) -> Self {
        AppError::Storage { op, resource, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::Validation(_) | AppError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. }
            | AppError::NotApplied { .. }
            | AppError::Db(_)
            | AppError::Config(_)
            | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client. Internal detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidId => "Invalid ID".into(),
            AppError::Validation(_) => "Invalid data".into(),
            AppError::MalformedRequest(_) => "Malformed JSON body".into(),
            AppError::NotFound(label) => format!("{} not found", label),
            AppError::PayloadTooLarge => "Payload too large".into(),
            AppError::Storage { op, resource, .. } | AppError::NotApplied { op, resource } => {
                format!("Error {} {}", op, resource)
            }
            AppError::Db(_) | AppError::Config(_) | AppError::Internal => "Internal server error".into(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
