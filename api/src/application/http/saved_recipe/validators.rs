use pantry_chef_core::domain::recipe::{
    entities::{Ingredient, Recipe},
    value_objects::SortOrder,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientPayload {
    pub name: String,
    pub quantity: String,
}

/// Recipe to keep. `savedAt` and `id` are assigned by the server, so any
/// value sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeValidator {
    #[validate(length(min = 1, message = "recipeName is required"))]
    pub recipe_name: String,

    pub description: String,

    pub ingredients: Vec<IngredientPayload>,

    pub instructions: Vec<String>,

    #[serde(default)]
    pub tips_and_variations: Option<Vec<String>>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<SaveRecipeValidator> for Recipe {
    fn from(payload: SaveRecipeValidator) -> Self {
        let mut recipe = Recipe::new(
            payload.recipe_name,
            payload.description,
            payload
                .ingredients
                .into_iter()
                .map(|i| Ingredient {
                    name: i.name,
                    quantity: i.quantity,
                })
                .collect(),
            payload.instructions,
        );
        recipe.tips_and_variations = payload.tips_and_variations;
        recipe.image_url = payload.image_url;
        recipe
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetSavedRecipesParams {
    /// Matched against recipe and ingredient names, ignoring case
    #[schema(example = "rice")]
    pub q: Option<String>,
    pub sort: Option<SortOrder>,
}
