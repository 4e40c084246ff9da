/**
 * JSON Recipe Store
 *
 * Persists recipes to a single `recipes.json` file. Recipes are a plain
 * shared collection with no ownership rules.
 */

use std::path::PathBuf;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::store::StoreError;
use crate::backend::recipes::types::Recipe;
use crate::backend::storage::{read_collection, write_collection};

#[derive(Debug)]
pub struct JsonRecipeStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonRecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Get all recipes in insertion order
    pub async fn get_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let _guard = self.lock.lock().await;
        read_collection(&self.path).await
    }

    /// Create a recipe with a fresh id
    pub async fn create_recipe(&self, title: String) -> Result<Recipe, StoreError> {
        let _guard = self.lock.lock().await;

        let mut recipes: Vec<Recipe> = read_collection(&self.path).await?;
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title,
        };
        recipes.push(recipe.clone());
        write_collection(&self.path, &recipes).await?;

        Ok(recipe)
    }
}
