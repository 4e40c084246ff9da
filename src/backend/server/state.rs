/**
 * Application State Management
 *
 * `AppState` holds the composed authentication core and the recipe store.
 * Everything in it is immutable after startup or synchronises internally,
 * so cloning the state per request only bumps reference counts.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware extract only the
 * piece they need, e.g. `State(verifier): State<Arc<TokenVerifier<Uuid>>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use uuid::Uuid;

use crate::auth::composer::AuthCore;
use crate::auth::login::LoginController;
use crate::auth::password::BcryptPasswordHasher;
use crate::auth::register::RegisterController;
use crate::auth::tokens::TokenVerifier;
use crate::backend::storage::{JsonRecipeStore, JsonUserStore};

pub type AppRegisterController = RegisterController<JsonUserStore, BcryptPasswordHasher>;
pub type AppLoginController = LoginController<JsonUserStore, BcryptPasswordHasher>;
pub type AppTokenVerifier = TokenVerifier<Uuid>;

#[derive(Clone)]
pub struct AppState {
    /// Registration flow over the JSON user store
    pub register: Arc<AppRegisterController>,

    /// Login flow over the JSON user store
    pub login: Arc<AppLoginController>,

    /// Bearer token verification for protected routes
    pub token_verifier: Arc<AppTokenVerifier>,

    /// Recipe persistence
    pub recipes: Arc<JsonRecipeStore>,
}

impl AppState {
    pub fn new(core: AuthCore<JsonUserStore>, recipes: Arc<JsonRecipeStore>) -> Self {
        Self {
            register: Arc::new(core.register),
            login: Arc::new(core.login),
            token_verifier: Arc::new(core.verifier),
            recipes,
        }
    }
}

impl FromRef<AppState> for Arc<AppRegisterController> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.register)
    }
}

impl FromRef<AppState> for Arc<AppLoginController> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.login)
    }
}

impl FromRef<AppState> for Arc<AppTokenVerifier> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.token_verifier)
    }
}

impl FromRef<AppState> for Arc<JsonRecipeStore> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.recipes)
    }
}
