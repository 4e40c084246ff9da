/**
 * Backend Error Types
 *
 * `BackendError` is what handlers and middleware return. It maps every
 * authentication-core failure onto an HTTP status and a message that is safe
 * to show the client.
 *
 * # Status Mapping
 *
 * - 400: `InvalidInput`
 * - 401: `UserNotFound`, `InvalidCredentials`, `InvalidToken`, `ExpiredToken`
 * - 409: `UserAlreadyExists`
 * - 500: `HashingFailure`, `StoreFailure`, `TokenSigningFailure`, store errors
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::store::StoreError;
use crate::shared::error::AuthError;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Handler error: {message}")]
    HandlerError {
        status: StatusCode,
        message: String,
    },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl BackendError {
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => match err {
                AuthError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::UserNotFound
                | AuthError::InvalidCredentials
                | AuthError::InvalidToken { .. }
                | AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
                AuthError::HashingFailure { .. }
                | AuthError::StoreFailure { .. }
                | AuthError::TokenSigningFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.public_message(),
            Self::Storage(_) => "Internal server error".to_string(),
        }
    }
}
