/**
 * Router Assembly
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_recipe_routes};
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_recipe_routes(router, &app_state);

    router
        .fallback(|| async {
            BackendError::handler(axum::http::StatusCode::NOT_FOUND, "Not found")
        })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
