use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{GenerateRecipesInput, GeneratedImage, ImageOptions, RecipeQuery},
    },
};

/// LLM Client trait for calling text models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Image model client. `Ok(None)` means the service answered without an image.
#[cfg_attr(test, mockall::automock)]
pub trait ImageClient: Send + Sync {
    fn generate_image(
        &self,
        prompt: String,
        options: ImageOptions,
    ) -> impl Future<Output = Result<Option<GeneratedImage>, CoreError>> + Send;
}

/// One durable key-value slot holding the serialized saved recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeStorage: Send + Sync {
    /// `Ok(None)` when nothing has been written yet
    fn read(&self) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn write(&self, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for turning pantry ingredients into recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGenerationService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// Service trait for the saved recipe collection.
///
/// Mutations return the whole collection after the change. Persistence
/// failures never surface here.
#[cfg_attr(test, mockall::automock)]
pub trait SavedRecipeService: Send + Sync {
    fn save_recipe(&self, recipe: Recipe) -> impl Future<Output = Vec<Recipe>> + Send;

    fn unsave_recipe(&self, recipe_name: String) -> impl Future<Output = Vec<Recipe>> + Send;

    fn get_saved_recipes(&self, query: RecipeQuery) -> impl Future<Output = Vec<Recipe>> + Send;

    fn is_recipe_saved(&self, recipe_name: String) -> impl Future<Output = bool> + Send;
}
