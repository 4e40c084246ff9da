//! Generic Auth - Main Library
//!
//! A transport-agnostic authentication core with a small Axum server on top.
//!
//! # Module Structure
//!
//! - **`shared`** - Error taxonomy and startup configuration
//!   - `AuthError` and its public messages
//!   - `AuthConfig` builder
//!
//! - **`auth`** - The core, generic over the user identifier type
//!   - Register and login controllers
//!   - bcrypt password hashing
//!   - HMAC JWT session tokens with a key id
//!   - Validators and the `UserStore` contract
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - `/register`, `/login` and the protected `/recipes` API
//!   - JSON file persistence
//!   - Bearer token middleware
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the Axum backend and the server binary.
//!   Without it only the core is built.
//!
//! # Error Handling
//!
//! - `AuthError` for everything the controllers and verifier return
//! - `BackendError` maps those onto HTTP status codes
//! - `ConfigError` for configuration rejected at startup

/// Shared types and configuration
pub mod shared;

/// Authentication core
pub mod auth;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
