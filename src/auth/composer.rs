/**
 * Composition
 *
 * Wires the reference collaborators (bcrypt, HMAC tokens, configured
 * validators) around a caller-supplied user store. Hosts that need other
 * collaborators construct the controllers directly.
 *
 * The login controller gets a decoy hash of a random string at the
 * configured cost, so unknown emails take as long as wrong passwords.
 */

use std::sync::Arc;

use crate::auth::login::LoginController;
use crate::auth::password::{BcryptPasswordHasher, PasswordHasher};
use crate::auth::register::RegisterController;
use crate::auth::store::UserStore;
use crate::auth::tokens::{Clock, SystemClock, TokenProvider, TokenVerifier};
use crate::shared::config::AuthConfig;

/// Controllers and verifier built from one configuration
pub struct AuthCore<S: UserStore> {
    pub register: RegisterController<S, BcryptPasswordHasher>,
    pub login: LoginController<S, BcryptPasswordHasher>,
    pub verifier: TokenVerifier<S::Id>,
}

impl<S: UserStore> AuthCore<S> {
    pub fn compose(config: &AuthConfig, store: Arc<S>) -> Self {
        Self::compose_with_clock(config, store, Arc::new(SystemClock))
    }

    pub fn compose_with_clock(config: &AuthConfig, store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        let keys = config.token_keys();
        let tokens = TokenProvider::new(Arc::clone(&keys)).with_clock(Arc::clone(&clock));
        let verifier = TokenVerifier::new(keys).with_clock(clock);
        let hasher = Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost));

        let login = login_with_decoy(
            LoginController::new(
                Arc::clone(&store),
                Arc::clone(&hasher),
                config.validators.clone(),
                tokens.clone(),
            ),
            &hasher,
        );

        tracing::debug!(
            kid = config.signing_key.kid(),
            algorithm = %config.algorithm,
            ttl_secs = config.token_ttl.as_secs(),
            decoy = login.has_decoy_hash(),
            "Composed authentication core"
        );

        Self {
            register: RegisterController::new(store, hasher, config.validators.clone(), tokens),
            login,
            verifier,
        }
    }
}

fn login_with_decoy<S: UserStore>(
    login: LoginController<S, BcryptPasswordHasher>,
    hasher: &BcryptPasswordHasher,
) -> LoginController<S, BcryptPasswordHasher> {
    match hasher.hash(&uuid::Uuid::new_v4().to_string()) {
        Ok(decoy) => login.with_decoy_hash(decoy),
        Err(e) => {
            tracing::warn!("Could not create decoy hash, unknown emails will answer faster: {}", e);
            login
        }
    }
}
