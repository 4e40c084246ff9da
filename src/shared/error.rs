//! Shared Error Types
//!
//! This module defines the error taxonomy of the authentication core. Every
//! controller, the token verifier and the password primitives report failures
//! as an [`AuthError`]; transports decide how each kind is presented.
//!
//! # Error Categories
//!
//! - Caller errors: `InvalidInput`, `UserAlreadyExists`
//! - Authentication failures: `UserNotFound`, `InvalidCredentials`,
//!   `InvalidToken`, `ExpiredToken`
//! - Infrastructure failures: `HashingFailure`, `StoreFailure`,
//!   `TokenSigningFailure`
//!
//! `UserNotFound` and `InvalidCredentials` stay separate here so logs can tell
//! them apart. [`AuthError::public_message`] collapses them into one message.
//!
//! # Usage
//!
//! ```rust
//! use generic_auth::shared::error::{AuthError, InputField};
//!
//! let error = AuthError::invalid_input(InputField::Email);
//! assert!(!error.is_internal());
//! ```
use std::fmt;

use thiserror::Error;

/// Which raw input a validator rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Email,
    Password,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// Failures surfaced by the authentication core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A validator rejected the raw email or password
    #[error("Invalid {field}")]
    InvalidInput {
        /// The field that failed validation
        field: InputField,
    },

    /// A user with this email is already registered
    #[error("User already exists")]
    UserAlreadyExists,

    /// No user matches the email
    #[error("User not found")]
    UserNotFound,

    /// The password does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bad signature, malformed structure, or unknown key id
    #[error("Invalid token: {reason}")]
    InvalidToken {
        /// What was wrong with the token (server-side detail only)
        reason: String,
    },

    /// Signature is valid but the token is past its expiry
    #[error("Token expired")]
    ExpiredToken,

    /// The password primitive failed or a stored hash is malformed
    #[error("Password hashing failed: {message}")]
    HashingFailure {
        /// Human-readable error message
        message: String,
    },

    /// The user store failed
    #[error("User store failed: {message}")]
    StoreFailure {
        /// Human-readable error message
        message: String,
    },

    /// Signing a freshly issued token failed
    #[error("Token signing failed: {message}")]
    TokenSigningFailure {
        /// Human-readable error message
        message: String,
    },
}

impl AuthError {
    pub fn invalid_input(field: InputField) -> Self {
        Self::InvalidInput { field }
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::HashingFailure {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::TokenSigningFailure {
            message: message.into(),
        }
    }

    /// True for failures caused by our own infrastructure rather than the caller
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::HashingFailure { .. } | Self::StoreFailure { .. } | Self::TokenSigningFailure { .. }
        )
    }

    /// Message that is safe to show to an external caller.
    ///
    /// Unknown-account and wrong-password failures share one message, and
    /// internal failures never expose their detail.
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidInput { field } => format!("Invalid {}", field),
            Self::UserAlreadyExists => "User already exists".to_string(),
            Self::UserNotFound | Self::InvalidCredentials => {
                "Invalid email or password".to_string()
            }
            Self::InvalidToken { .. } => "Invalid token".to_string(),
            Self::ExpiredToken => "Token expired".to_string(),
            Self::HashingFailure { .. }
            | Self::StoreFailure { .. }
            | Self::TokenSigningFailure { .. } => "Internal server error".to_string(),
        }
    }
}
