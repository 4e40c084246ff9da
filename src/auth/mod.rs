//! Authentication Core
//!
//! Transport-agnostic registration and login, password hashing, and
//! stateless session tokens. Everything here is generic over the identifier
//! type a [`UserStore`] assigns.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── identity.rs    - UserId bound, Credentials, StoredUser
//! ├── store.rs       - UserStore contract, MemoryUserStore
//! ├── password.rs    - PasswordHasher / PasswordVerifier (bcrypt)
//! ├── tokens.rs      - TokenProvider / TokenVerifier (HMAC JWT with kid)
//! ├── validators.rs  - Email/password predicates and named policies
//! ├── register.rs    - RegisterController
//! ├── login.rs       - LoginController
//! └── composer.rs    - AuthCore wiring from AuthConfig
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate → existence check → hash → create → token
//! 2. **Login**: validate → look up → verify password → token
//! 3. **Verify**: key id → signature → expiry → subject
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use generic_auth::auth::{AuthCore, MemoryUserStore, ValidationPolicy};
//! use generic_auth::shared::config::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::builder()
//!     .secret("from your deployment environment")
//!     .token_ttl(Duration::from_secs(3600))
//!     .validation(ValidationPolicy::Standard)
//!     .build()?;
//! let core = AuthCore::compose(&config, Arc::new(MemoryUserStore::with_uuids()));
//!
//! let token = core.register.register("hi@x.im", "correct horse").await?;
//! let user_id = core.verifier.verify(token.as_str())?;
//! # let _ = user_id;
//! # Ok(())
//! # }
//! ```

/// Identifier bound and user records
pub mod identity;

/// User store contract
pub mod store;

/// Password hashing and verification
pub mod password;

/// Session token issue and verification
pub mod tokens;

/// Credential validators
pub mod validators;

/// Registration flow
pub mod register;

/// Login flow
pub mod login;

/// Wiring from configuration
pub mod composer;

pub use composer::AuthCore;
pub use identity::{Credentials, StoredUser, UserId};
pub use login::LoginController;
pub use password::{BcryptPasswordHasher, PasswordError, PasswordHasher, PasswordVerifier};
pub use register::RegisterController;
pub use store::{MemoryUserStore, StoreError, UserStore};
pub use tokens::{
    Claims, Clock, SessionToken, SigningKey, SystemClock, TokenAlgorithm, TokenKeys, TokenProvider,
    TokenVerifier, DEFAULT_KEY_ID,
};
pub use validators::{EmailValidator, PasswordValidator, ValidationPolicy, Validators};
