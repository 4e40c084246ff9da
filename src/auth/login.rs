/**
 * Login Controller
 *
 * # Authentication Process
 *
 * 1. Validate email and password
 * 2. Look up user by email
 * 3. Verify password against the stored hash
 * 4. Issue a token for the found identity
 *
 * No mutation happens here. `UserNotFound` and `InvalidCredentials` are
 * reported separately so logs can tell them apart; transports must present
 * them identically.
 *
 * With a decoy hash configured, an unknown email still pays for one password
 * verification, so response time does not reveal which emails are registered.
 */

use std::sync::Arc;

use crate::auth::password::{verify_blocking, PasswordVerifier};
use crate::auth::store::UserStore;
use crate::auth::tokens::{SessionToken, TokenProvider};
use crate::auth::validators::Validators;
use crate::shared::error::{AuthError, InputField};

pub struct LoginController<S, V> {
    store: Arc<S>,
    verifier: Arc<V>,
    validators: Validators,
    tokens: TokenProvider,
    decoy_hash: Option<String>,
}

impl<S, V> LoginController<S, V>
where
    S: UserStore,
    V: PasswordVerifier,
{
    pub fn new(store: Arc<S>, verifier: Arc<V>, validators: Validators, tokens: TokenProvider) -> Self {
        Self {
            store,
            verifier,
            validators,
            tokens,
            decoy_hash: None,
        }
    }

    /// Hash verified against when the email is unknown
    pub fn with_decoy_hash(mut self, hash: impl Into<String>) -> Self {
        self.decoy_hash = Some(hash.into());
        self
    }

    pub fn has_decoy_hash(&self) -> bool {
        self.decoy_hash.is_some()
    }

    /// Authenticate a user and return a fresh session token
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - A validator rejected the email or password
    /// * `UserNotFound` - No user is registered with this email
    /// * `InvalidCredentials` - The password does not match
    /// * `StoreFailure` - The lookup failed
    /// * `HashingFailure` - The stored hash is malformed
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        if !self.validators.accepts_email(email) {
            tracing::warn!("Login rejected: invalid email format");
            return Err(AuthError::invalid_input(InputField::Email));
        }
        if !self.validators.accepts_password(password) {
            tracing::warn!("Login rejected: invalid password for {}", email);
            return Err(AuthError::invalid_input(InputField::Password));
        }

        let user = self.store.find_user(email).await.map_err(|e| {
            tracing::error!("User lookup failed: {:?}", e);
            AuthError::store(e.to_string())
        })?;

        let Some(user) = user else {
            if let Some(decoy) = &self.decoy_hash {
                // timing only
                let _ = verify_blocking(&self.verifier, password, decoy).await;
            }
            tracing::warn!("User not found: {}", email);
            return Err(AuthError::UserNotFound);
        };

        let valid = verify_blocking(&self.verifier, password, &user.hashed_password)
            .await
            .map_err(|e| {
                tracing::error!("Password verification error for {}: {:?}", email, e);
                AuthError::hashing(e.to_string())
            })?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.id).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            e
        })?;

        tracing::info!("User logged in: {} ({})", user.email, user.id);
        Ok(token)
    }
}
