// ABOUTME: Unified error handling with standard error codes and HTTP responses
// ABOUTME: Maps validation, persistence, and crypto failures to wire-level status codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result type used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Error categories, each with a fixed HTTP status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request is missing a required field or carries an unusable value
    InvalidInput,
    /// Requested entity does not exist
    NotFound,
    /// Database operation failed, including constraint violations
    DatabaseError,
    /// Stored ciphertext could not be decrypted (wrong key or corrupt data)
    DecryptionFailed,
    /// Encryption or other cryptographic operation failed
    CryptoError,
    /// Server configuration is missing or invalid
    ConfigError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status code for this error category
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError
            | Self::DecryptionFailed
            | Self::CryptoError
            | Self::ConfigError
            | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application error carrying a category and human-readable description
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Human-readable description returned in the response body
    pub message: String,
}

impl AppError {
    /// Create a new error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Missing or invalid request input (HTTP 400)
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Entity not found (HTTP 404)
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, format!("Not found: {}", entity.into()))
    }

    /// Database-level failure (HTTP 500)
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Decryption failure, distinct from absence so callers can decide
    /// whether to mask it (HTTP 500 if surfaced)
    pub fn decryption(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DecryptionFailed, message)
    }

    /// Encryption or key-handling failure (HTTP 500)
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CryptoError, message)
    }

    /// Configuration failure surfaced at startup (HTTP 500 if reached)
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure (HTTP 500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.message }))).into_response()
    }
}
