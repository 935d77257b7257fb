//! Conversion of typed failures into error-shaped JSON replies.

use crate::routes::ErrorReply;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use continuity_core::{ProviderError, ResolutionError};
use continuity_memory::MemoryError;
use log::{error, warn};
use thiserror::Error;

/// Failure of a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Query resolution failed.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// The knowledge store failed.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

impl ApiError {
    /// HTTP status and message for this failure.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Resolution(ResolutionError::EmptyQuestion) => {
                (StatusCode::BAD_REQUEST, ResolutionError::EmptyQuestion.to_string())
            }
            Self::Resolution(ResolutionError::Provider(err @ ProviderError::Timeout(_))) => {
                (StatusCode::GATEWAY_TIMEOUT, err.to_string())
            }
            Self::Resolution(ResolutionError::Provider(err)) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            Self::Resolution(ResolutionError::Memory(err)) | Self::Memory(err) => memory_status(err),
        }
    }
}

fn memory_status(err: &MemoryError) -> (StatusCode, String) {
    match err {
        MemoryError::InvalidRecord(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("request failed (status={}): {}", status.as_u16(), message);
        } else {
            warn!("request rejected (status={}): {}", status.as_u16(), message);
        }
        (status, Json(ErrorReply { error: message })).into_response()
    }
}
