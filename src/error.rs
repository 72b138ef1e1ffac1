use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// A single schema violation: which field failed and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Error surface for every operation in the service.
///
/// `Unauthorized` covers both "product does not exist" and "product is
/// owned by someone else" with one indistinguishable signal, so callers
/// cannot probe for other tenants' products. `NotFound` is only reachable
/// after ownership has been confirmed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("product not found")]
    Unauthorized,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("not found")]
    NotFound,
    #[error("storage error")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Unauthorized => (StatusCode::NOT_FOUND, json!({ "error": "product not found" })),
            ApiError::Validation(v) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": v.message, "field": v.field }),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "not found" })),
            ApiError::Storage(e) => {
                error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
