//! Backend Module
//!
//! Axum HTTP server exposing the authentication core and a protected
//! recipes API. Only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - CLI configuration, application state, composition
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Register and login handlers
//! - **`recipes`** - Recipe handlers behind bearer authentication
//! - **`middleware`** - Bearer token middleware and extractor
//! - **`extract`** - JSON body extractor with `BackendError` rejections
//! - **`storage`** - JSON file stores for users and recipes
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication handlers
//! ├── recipes/        - Recipe handlers and types
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! ├── storage/        - JSON persistence
//! └── error/          - Error types
//! ```
//!
//! # Endpoints
//!
//! - `POST /register` - `{email, password}` → `{token}`
//! - `POST /login` - `{email, password}` → `{token}`
//! - `GET /recipes` - list recipes (bearer token required)
//! - `POST /recipes` - `{title}` → created recipe (bearer token required)
//!
//! Errors, including malformed request bodies (400), are returned as
//! `{"error": <message>, "status": <code>}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::time::Duration;
//! use generic_auth::auth::ValidationPolicy;
//! use generic_auth::backend::server::create_app;
//! use generic_auth::shared::config::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::builder()
//!     .secret("deployment secret")
//!     .token_ttl(Duration::from_secs(3600))
//!     .validation(ValidationPolicy::Permissive)
//!     .build()?;
//! let app = create_app(&config, Path::new("/var/lib/minimal-auth"));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication handlers
pub mod auth;

/// Recipe handlers
pub mod recipes;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// JSON file persistence
pub mod storage;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, Cli};
