/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /register` - User registration
 * - `POST /login` - User login
 *
 * ## Recipes (bearer token required)
 * - `GET /recipes` - List recipes
 * - `POST /recipes` - Create a recipe
 */

use axum::{middleware, routing, Router};

use crate::backend::auth::{login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::recipes::{create_recipe, get_recipes};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", routing::post(register))
        .route("/login", routing::post(login))
}

/// Recipe routes, wrapped in the authentication middleware
///
/// The middleware needs the state up front to reach the token verifier.
pub fn configure_recipe_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let recipes = Router::new()
        .route("/recipes", routing::get(get_recipes).post(create_recipe))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(recipes)
}
