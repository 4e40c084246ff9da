//! Authentication Endpoints
//!
//! HTTP handlers that adapt the authentication core to JSON over axum.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - POST /register
//!     └── login.rs    - POST /login
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → verified by
//!    [`crate::backend::middleware::auth_middleware`]

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthRequest, TokenResponse};
pub use handlers::{login, register};
