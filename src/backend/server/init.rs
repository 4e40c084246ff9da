/**
 * Server Initialization
 *
 * Composes the authentication core over the JSON stores in a data
 * directory and builds the router.
 */

use std::path::Path;
use std::sync::Arc;

use axum::Router;

use crate::auth::composer::AuthCore;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::backend::storage::{JsonRecipeStore, JsonUserStore};
use crate::shared::config::AuthConfig;

pub const USERS_FILE: &str = "users.json";
pub const RECIPES_FILE: &str = "recipes.json";

/// Build application state from configuration and a data directory
pub fn compose(config: &AuthConfig, data_dir: &Path) -> AppState {
    let users = Arc::new(JsonUserStore::new(data_dir.join(USERS_FILE)));
    let recipes = Arc::new(JsonRecipeStore::new(data_dir.join(RECIPES_FILE)));

    tracing::info!(
        "Using data directory {} (token ttl {}s, key id '{}')",
        data_dir.display(),
        config.token_ttl.as_secs(),
        config.signing_key.kid()
    );

    AppState::new(AuthCore::compose(config, users), recipes)
}

/// Create the Axum application
pub fn create_app(config: &AuthConfig, data_dir: &Path) -> Router<()> {
    create_router(compose(config, data_dir))
}
