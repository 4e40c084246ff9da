//! Shared Module
//!
//! Types used by both the authentication core and the HTTP backend: the
//! error taxonomy and the startup configuration.

/// Shared error types
pub mod error;

/// Authentication configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AuthConfig, AuthConfigBuilder, ConfigError};
pub use error::{AuthError, InputField};
