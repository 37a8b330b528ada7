//! Error types
//!
//! `DataError` covers everything that can go wrong while loading the static
//! reference documents at startup. `ApiError` is the request-path error used by
//! the routes that accept a caller-supplied body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("PLU mapping is not embedded JSON: {0}")]
    EmbeddedPlu(#[source] serde_json::Error),

    #[error("Unexpected document shape: {message}")]
    Shape { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        tracing::warn!("Rejected request: {}", message);

        (status, Json(json!({ "error": message }))).into_response()
    }
}
