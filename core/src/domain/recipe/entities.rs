use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

/// A recipe as produced by the generation bridge or kept in the saved store.
///
/// `recipe_name` is the identity inside the saved store. `id` and `saved_at`
/// are only ever assigned by the store when the recipe is captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips_and_variations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<i64>,
}

impl Recipe {
    pub fn new(
        recipe_name: String,
        description: String,
        ingredients: Vec<Ingredient>,
        instructions: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            recipe_name,
            description,
            ingredients,
            instructions,
            tips_and_variations: None,
            image_url: None,
            saved_at: None,
        }
    }

    /// Drops every store-assigned field, leaving a transient recipe.
    pub fn into_transient(mut self) -> Self {
        self.id = None;
        self.saved_at = None;
        self
    }

    /// Stamps the capture identity and time. Whatever the caller sent in
    /// `id` or `saved_at` is overwritten.
    pub fn captured_at(mut self, saved_at: i64) -> Self {
        self.id = Some(generate_uuid_v7());
        self.saved_at = Some(saved_at);
        self
    }

    /// Case-insensitive match of an already lowercased needle against the
    /// recipe name or any ingredient name.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.recipe_name.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.to_lowercase().contains(needle))
    }
}
