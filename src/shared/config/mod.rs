//! Authentication configuration module
//!
//! Everything the core needs from its host is collected here once at startup
//! and then shared read-only. The core itself never reads the environment or
//! the disk; the server binary maps its CLI onto [`AuthConfigBuilder`].
//!
//! The signing secret, the token lifetime and the validation policy have no
//! defaults: [`AuthConfigBuilder::build`] fails if any of them is missing.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::auth::tokens::{SigningKey, TokenAlgorithm, TokenKeys, DEFAULT_KEY_ID};
use crate::auth::validators::{ValidationPolicy, Validators};

/// Immutable authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret and key id
    pub signing_key: SigningKey,
    /// HMAC digest for tokens
    pub algorithm: TokenAlgorithm,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// Email/password predicates
    pub validators: Validators,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create a new AuthConfigBuilder
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }

    /// Signing material shared by token provider and verifier
    pub fn token_keys(&self) -> Arc<TokenKeys> {
        Arc::new(TokenKeys::new(
            self.signing_key.clone(),
            self.algorithm,
            self.token_ttl,
        ))
    }
}

/// Builder for AuthConfig
#[derive(Debug, Default)]
pub struct AuthConfigBuilder {
    secret: Option<String>,
    key_id: Option<String>,
    algorithm: Option<TokenAlgorithm>,
    token_ttl: Option<Duration>,
    validators: Option<Validators>,
    bcrypt_cost: Option<u32>,
}

impl AuthConfigBuilder {
    /// Set the HMAC signing secret (required)
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the key id written into every token header (default `auth-jwt`)
    pub fn key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Set the digest algorithm (default HS256)
    pub fn algorithm(mut self, algorithm: TokenAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the token lifetime (required)
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Use one of the named validator policies
    pub fn validation(mut self, policy: ValidationPolicy) -> Self {
        self.validators = Some(policy.validators());
        self
    }

    /// Use custom validators
    pub fn validators(mut self, validators: Validators) -> Self {
        self.validators = Some(validators);
        self
    }

    /// Set the bcrypt cost (default `bcrypt::DEFAULT_COST`)
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let secret = self.secret.ok_or(ConfigError::MissingValue("secret"))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue("secret", "cannot be empty".to_string()));
        }

        let key_id = self.key_id.unwrap_or_else(|| DEFAULT_KEY_ID.to_string());
        if key_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue("key_id", "cannot be empty".to_string()));
        }

        let token_ttl = self.token_ttl.ok_or(ConfigError::MissingValue("token_ttl"))?;
        if token_ttl.as_secs() == 0 {
            return Err(ConfigError::InvalidValue(
                "token_ttl",
                "must be at least one second".to_string(),
            ));
        }

        let validators = self.validators.ok_or(ConfigError::MissingValue("validation"))?;

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "bcrypt_cost",
                format!("{} is outside 4..=31", bcrypt_cost),
            ));
        }

        Ok(AuthConfig {
            signing_key: SigningKey::new(key_id, secret),
            algorithm: self.algorithm.unwrap_or_default(),
            token_ttl,
            validators,
            bcrypt_cost,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
