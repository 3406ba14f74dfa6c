use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EpiwatchError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EpiwatchError {
    /// Shortcut for field-level validation failures.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        EpiwatchError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EpiwatchError>;

/// Wrapper that turns an [`EpiwatchError`] into an HTTP response.
///
/// Validation failures map to 400, a missing model to 503 (operator must
/// install/train an artifact before retrying), everything else to 500.
#[derive(Debug)]
pub struct ApiError(pub EpiwatchError);

impl<E> From<E> for ApiError
where
    E: Into<EpiwatchError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EpiwatchError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            EpiwatchError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
