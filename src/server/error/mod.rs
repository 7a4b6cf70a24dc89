//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so every
//! failure reaches the client as `{success: false, error, code}`.

pub mod ai;
pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{ai::AiError, auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `AiError` handle their own response mapping, while generic variants carry a user-facing
/// message and map to a fixed status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings file missing, malformed or incomplete. Only raised before the server binds.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Text generation error.
    ///
    /// Delegates to `AiError::into_response()` for 502/503 mapping.
    #[error(transparent)]
    AiErr(#[from] AiError),

    /// Query or connection failure. Logged, answered with a generic 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Building the outbound HTTP client failed.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// 404 with a Portuguese message naming the missing resource.
    #[error("{0}")]
    NotFound(String),

    /// 400 for failed validation or a disallowed state transition.
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but not allowed to perform the operation.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// 500 whose message is only written to the log.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto::new(message, status.as_u16()))).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `AuthErr` and `AiErr`, delegated to their own `into_response()`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AiErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers 500 with a fixed message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
