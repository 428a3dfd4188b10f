use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::form::FormError;
use crate::table::TableError;

/// A draft that cannot become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired { fields: Vec<&'static str> },

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a date formatted YYYY-MM-DD, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0} is read-only")]
    ReadOnly(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::RowNotFound(_) => AppError::NotFound,
            TableError::UnknownColumn(_) | TableError::NotSortable(_) => {
                AppError::BadRequest(err.to_string())
            }
            TableError::ActionUnavailable { .. } => AppError::ReadOnly(err.to_string()),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::NotOpen | FormError::Busy => AppError::Conflict(err.to_string()),
            FormError::UnknownField(_) | FormError::NotText(_) => {
                AppError::BadRequest(err.to_string())
            }
            FormError::Json(e) => AppError::Serialization(e),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::ReadOnly(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Serialization(e) => {
                error!("serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Serialization error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
