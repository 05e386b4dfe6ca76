//! Error types for dashboard handlers.
//!
//! Variants carry full details for logging. `IntoResponse` only ever
//! exposes a short, user-safe message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// JSON error body returned by API routes.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Errors raised by page handlers.
#[derive(Debug)]
pub enum DashboardError {
    /// Submitted form data was rejected.
    InvalidInput { field: &'static str, reason: String },
    /// The referenced record does not exist.
    NotFound { entity: &'static str, id: String },
    /// The data store failed.
    Database { details: String },
    /// A template failed to render.
    Render { details: String },
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::NotFound { entity, id } => write!(f, "{entity} '{id}' not found"),
            Self::Database { details } => write!(f, "database error: {details}"),
            Self::Render { details } => write!(f, "template render error: {details}"),
        }
    }
}

impl std::error::Error for DashboardError {}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidInput { field, reason } => {
                (StatusCode::BAD_REQUEST, format!("Invalid {field}: {reason}")).into_response()
            }
            Self::NotFound { entity, .. } => {
                (StatusCode::NOT_FOUND, format!("{entity} not found")).into_response()
            }
            Self::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
            Self::Render { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Errors raised by JSON API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The data store failed.
    Database { details: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database { details } => write!(f, "database error: {details}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Database { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Internal server error",
                }),
            )
                .into_response(),
        }
    }
}
