//! Recipes Resource
//!
//! A shared list of recipes that any authenticated user can read and extend.

/// Recipe data types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_recipe, get_recipes};
pub use types::{CreateRecipeRequest, Recipe};
