/**
 * Registration Controller
 *
 * # Registration Process
 *
 * 1. Validate email, then password
 * 2. Check the store for an existing user (short-circuit on a hit)
 * 3. Hash the password
 * 4. Create the user (the only mutation, called at most once)
 * 5. Issue a token for the new identity
 *
 * Any failure before step 4 leaves the store untouched. A duplicate that
 * slips past step 2 under concurrency is caught by the store's atomic create
 * and reported as `UserAlreadyExists`.
 */

use std::sync::Arc;

use crate::auth::password::{hash_blocking, PasswordHasher};
use crate::auth::store::{StoreError, UserStore};
use crate::auth::tokens::{SessionToken, TokenProvider};
use crate::auth::validators::Validators;
use crate::shared::error::{AuthError, InputField};

pub struct RegisterController<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
    validators: Validators,
    tokens: TokenProvider,
}

impl<S, H> RegisterController<S, H>
where
    S: UserStore,
    H: PasswordHasher,
{
    pub fn new(store: Arc<S>, hasher: Arc<H>, validators: Validators, tokens: TokenProvider) -> Self {
        Self {
            store,
            hasher,
            validators,
            tokens,
        }
    }

    /// Register a new user and return a session token for it
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - A validator rejected the email or password
    /// * `UserAlreadyExists` - The email is already registered
    /// * `HashingFailure` - bcrypt failed
    /// * `StoreFailure` - The store failed to look up or create the user
    pub async fn register(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        if !self.validators.accepts_email(email) {
            tracing::warn!("Registration rejected: invalid email format");
            return Err(AuthError::invalid_input(InputField::Email));
        }
        if !self.validators.accepts_password(password) {
            tracing::warn!("Registration rejected: invalid password for {}", email);
            return Err(AuthError::invalid_input(InputField::Password));
        }

        let existing = self.store.find_user(email).await.map_err(|e| {
            tracing::error!("User lookup failed: {:?}", e);
            AuthError::store(e.to_string())
        })?;
        if existing.is_some() {
            tracing::warn!("Email already registered: {}", email);
            return Err(AuthError::UserAlreadyExists);
        }

        let hashed_password = hash_blocking(&self.hasher, password).await.map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AuthError::hashing(e.to_string())
        })?;

        let user = self
            .store
            .create_user(email, &hashed_password)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate { .. } => {
                    tracing::warn!("Concurrent registration lost the race for: {}", email);
                    AuthError::UserAlreadyExists
                }
                other => {
                    tracing::error!("Failed to create user: {:?}", other);
                    AuthError::store(other.to_string())
                }
            })?;

        let token = self.tokens.issue(&user.id).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            e
        })?;

        tracing::info!("User registered: {} ({})", user.email, user.id);
        Ok(token)
    }
}
