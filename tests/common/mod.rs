//! Common test utilities and helpers
//!
//! - Test configuration and app construction over a temporary data directory
//! - Request helpers that drive the router with `tower::ServiceExt::oneshot`
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use auth_helpers::*;
