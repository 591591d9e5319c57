use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<fitcoach_shared::Error> for AppError {
    fn from(err: fitcoach_shared::Error) -> Self {
        match err {
            fitcoach_shared::Error::Validate(errors) => AppError::ValidationError(errors.to_string()),
            fitcoach_shared::Error::BadRequest(msg) => AppError::BadRequest(msg),
            e @ fitcoach_shared::Error::NotFound(_) => AppError::NotFound(e.to_string()),
            fitcoach_shared::Error::Server(msg) => AppError::InternalError(msg),
            fitcoach_shared::Error::Unknown(e) => AppError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
