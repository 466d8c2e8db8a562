//! Error types for the lab inventory server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable error codes returned in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    DbFailure = 3,
    NoSuchData = 4,
    EquipmentNotAvailable = 5,
    BadValue = 6,
}

/// Reason a submitted form was rejected before any store mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Field '{0}' must be at most {1} characters")]
    TooLong(&'static str, usize),

    #[error("Quantity must be an integer, got '{0}'")]
    InvalidQuantity(String),

    #[error("Quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    #[error("Date must use the YYYY-MM-DD format, got '{0}'")]
    InvalidDate(String),

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("File name '{0}' has no usable characters")]
    InvalidFileName(String),
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Upload storage error: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized, msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::InvalidInput(e) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, e.to_string()),
            AppError::Unavailable(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::EquipmentNotAvailable,
                msg.clone(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Upload(e) => {
                tracing::error!("Upload storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Could not store the uploaded file".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
