use futures::future::join_all;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        helpers::{build_image_prompt, build_recipe_prompt, parse_generated_recipes},
        ports::{
            ImageClient, LLMClient, RecipeGenerationService, RecipeStorage, SavedRecipeService,
        },
        schema::get_recipe_schema,
        value_objects::{GenerateRecipesInput, ImageOptions, RecipeQuery},
    },
};

impl<LLM, IMG, RS> Service<LLM, IMG, RS>
where
    LLM: LLMClient,
    IMG: ImageClient,
    RS: RecipeStorage,
{
    /// Generate the illustration for one recipe. Failures stay local to the
    /// recipe and come back as `None`.
    async fn generate_recipe_image(&self, recipe_name: &str) -> Option<String> {
        let result = self
            .image_client
            .generate_image(build_image_prompt(recipe_name), ImageOptions::default())
            .await;

        match result {
            Ok(Some(image)) => Some(image.to_data_uri()),
            Ok(None) => {
                warn!("No image returned for {}", recipe_name);
                None
            }
            Err(e) => {
                error!("Failed to generate image for {}: {}", recipe_name, e);
                None
            }
        }
    }
}

impl<LLM, IMG, RS> RecipeGenerationService for Service<LLM, IMG, RS>
where
    LLM: LLMClient,
    IMG: ImageClient,
    RS: RecipeStorage,
{
    #[instrument(skip(self, input), fields(input_len = input.ingredients.len()))]
    async fn generate_recipes(&self, input: GenerateRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        // 1. Reject blank input before touching the network
        if input.ingredients.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }

        // 2. Ask the text model for recipes following the fixed schema
        let raw_response = self
            .llm_client
            .generate_with_text(build_recipe_prompt(&input.ingredients), get_recipe_schema())
            .await
            .map_err(|e| {
                error!("Error generating recipes: {}", e);
                CoreError::Generation(e.to_string())
            })?;

        // 3. Parse, all or nothing
        let recipes = parse_generated_recipes(&raw_response)?;

        // 4. One image request per recipe, joined in launch order
        let images = join_all(
            recipes
                .iter()
                .map(|recipe| self.generate_recipe_image(&recipe.recipe_name)),
        )
        .await;

        // 5. Merge by position
        let recipes: Vec<Recipe> = recipes
            .into_iter()
            .zip(images)
            .map(|(mut recipe, image_url)| {
                recipe.image_url = image_url;
                recipe
            })
            .collect();

        info!(
            count = recipes.len(),
            with_images = recipes.iter().filter(|r| r.image_url.is_some()).count(),
            "Recipes generated"
        );

        Ok(recipes)
    }
}

impl<LLM, IMG, RS> SavedRecipeService for Service<LLM, IMG, RS>
where
    LLM: LLMClient,
    IMG: ImageClient,
    RS: RecipeStorage,
{
    async fn save_recipe(&self, recipe: Recipe) -> Vec<Recipe> {
        self.saved_recipes.add(recipe).await
    }

    async fn unsave_recipe(&self, recipe_name: String) -> Vec<Recipe> {
        self.saved_recipes.remove(&recipe_name).await
    }

    async fn get_saved_recipes(&self, query: RecipeQuery) -> Vec<Recipe> {
        self.saved_recipes.query(&query).await
    }

    async fn is_recipe_saved(&self, recipe_name: String) -> bool {
        self.saved_recipes.contains(&recipe_name).await
    }
}
