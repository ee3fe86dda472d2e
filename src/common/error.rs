use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::common::response::{ApiError, ErrorResponse, FieldMessages};
use crate::modules::taxonomy::store::RepositoryError;

pub const INVALID_DATA_MESSAGE: &str = "The given data was invalid.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("The given data was invalid.")]
    Validation(FieldMessages),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(kind) => AppError::NotFound(format!("{} not found", kind.label())),
            RepositoryError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::error("Database error occurred"),
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, ErrorResponse::error(msg)),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::with_errors(INVALID_DATA_MESSAGE, errors),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, ErrorResponse::error(msg)),
            AppError::PayloadTooLarge(ref msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorResponse::error(msg))
            }
        };

        ApiError(body, status).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
