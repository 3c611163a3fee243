//! HTTP error mapping for API handlers.

use crate::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Handler error wrapper that renders [`AppError`] as a JSON response.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::UnknownTab(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            AppError::SessionUnavailable => {
                tracing::error!("Editor session lock is poisoned");
                (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string())
            }
            AppError::Server(_) | AppError::Internal => {
                tracing::error!("Internal error: {:?}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
