//! Error types for the website generator server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Generator Error Enum ==
/// Unified error type for the generation pipeline and its HTTP boundary.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Request failed validation before reaching the pipeline
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Client exceeded its request quota for the current window
    #[error("Rate limit exceeded for {0}")]
    RateLimitExceeded(String),

    /// The upstream completion dependency failed
    #[error("Upstream generation failed: {0}")]
    Upstream(String),

    /// Writing the generated project to disk failed
    #[error("Project materialization failed: {0}")]
    Materialization(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GeneratorError {
    fn into_response(self) -> Response {
        let status = match &self {
            GeneratorError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GeneratorError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            GeneratorError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GeneratorError::Materialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GeneratorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the generator server.
pub type Result<T> = std::result::Result<T, GeneratorError>;
