use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
}

/// Body of `POST /recipes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
}
