/*!
 * Error types for the xlf-translator service.
 *
 * This module contains custom error types for the different layers of the
 * service, using the thiserror crate for ergonomic error definitions.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur when talking to the text generation API.
///
/// Every variant is recoverable: callers substitute local output instead
/// of failing the request.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key was configured
    #[error("API key is not configured")]
    MissingApiKey,

    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The API answered without any text
    #[error("API returned an empty response")]
    EmptyResponse,

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

impl ProviderError {
    /// Whether this failure comes from local configuration rather than the API
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

/// Errors raised while validating an inbound request body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but has the wrong shape
    #[error("Invalid field {field}: {reason}")]
    InvalidField {
        /// Wire name of the field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A required sequence or string is empty
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Request rejected before any processing
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// HTTP status matching this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::InvalidField {
            field: "body",
            reason: rejection.body_text(),
        })
    }
}
