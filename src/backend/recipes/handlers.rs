/**
 * Recipe Handlers
 *
 * Both endpoints sit behind the authentication middleware; the `AuthUser`
 * extractor fails with 401 if they are ever mounted without it.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::middleware::AuthUser;
use crate::backend::recipes::types::{CreateRecipeRequest, Recipe};
use crate::backend::storage::JsonRecipeStore;

/// `GET /recipes`
pub async fn get_recipes(
    AuthUser(user): AuthUser,
    State(store): State<Arc<JsonRecipeStore>>,
) -> Result<Json<Vec<Recipe>>, BackendError> {
    let recipes = store.get_recipes().await?;
    tracing::debug!("Listing {} recipes for {}", recipes.len(), user.user_id);
    Ok(Json(recipes))
}

/// `POST /recipes`
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(store): State<Arc<JsonRecipeStore>>,
    AppJson(request): AppJson<CreateRecipeRequest>,
) -> Result<Json<Recipe>, BackendError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(BackendError::bad_request("Recipe title cannot be empty"));
    }

    let recipe = store.create_recipe(title.to_string()).await?;
    tracing::info!("Recipe {} created by {}", recipe.id, user.user_id);
    Ok(Json(recipe))
}
