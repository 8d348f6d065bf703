//! HTTP error handling and response conversion.
//!
//! Maps application failures to HTTP status codes and JSON bodies.
//! Failures of the remote classification service keep their upstream
//! status and body so the client sees what the API actually said.

use crate::application::classify_image::use_case::ClassifyImageError;
use crate::domain::classification::errors::ClassifyError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failed (400).
    BadRequest(String),

    /// The remote classifier answered with a non-200 status (502);
    /// upstream status and body are carried through.
    Upstream { status: u16, body: String },

    /// The remote classifier could not be reached or its response
    /// could not be decoded (503).
    Transport(String),

    /// Unclassified internal error (500).
    #[allow(dead_code)]
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Upstream { status, .. } => {
                write!(f, "Classification API returned status {}", status)
            }
            Self::Transport(msg) => write!(f, "Transport failure: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for the response. Upstream bodies are re-parsed as
    /// JSON for display when possible, otherwise surfaced as text.
    fn body(&self) -> serde_json::Value {
        match self {
            Self::BadRequest(msg) => json!({ "error": msg }),
            Self::Upstream { status, body } => {
                let upstream = serde_json::from_str::<serde_json::Value>(body)
                    .unwrap_or_else(|_| json!(body));
                json!({
                    "error": "Classification service error",
                    "upstream_status": status,
                    "upstream_body": upstream,
                })
            }
            Self::Transport(_) => json!({ "error": "Could not reach the classification service" }),
            Self::Internal(_) => json!({ "error": "Internal server error" }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_GATEWAY => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::debug!("error={}", self);
            }
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<ClassifyImageError> for AppError {
    fn from(err: ClassifyImageError) -> Self {
        match err {
            ClassifyImageError::EmptyUpload => {
                AppError::BadRequest("Uploaded image has no content".into())
            }
            ClassifyImageError::Outcome(ClassifyError::Server { status, body }) => {
                AppError::Upstream { status, body }
            }
            ClassifyImageError::Outcome(ClassifyError::Transport(msg)) => {
                AppError::Transport(msg)
            }
        }
    }
}
