use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// Build the text-model prompt for a raw, free-text ingredient list
pub fn build_recipe_prompt(ingredients: &str) -> String {
    format!(
        "You are a creative chef. Based on the following ingredients, generate 3 diverse and delicious recipes.\n\
         The ingredients I have are: {ingredients}.\n\
         Feel free to include common pantry staples (like salt, pepper, oil, flour, sugar, spices) if needed, but prioritize the provided ingredients.\n\
         For each recipe, provide a creative name, a short one-sentence description, a list of all required ingredients with their specific quantities \
         (as an array of objects, where each object has a \"name\" and a \"quantity\" property), and clear, detailed step-by-step instructions. \
         Include specific cooking times and temperatures where appropriate. Each step should be a distinct action.\n\
         Ensure the output is a valid JSON array."
    )
}

pub fn build_image_prompt(recipe_name: &str) -> String {
    format!(
        "A delicious, professional food photograph of \"{recipe_name}\", realistic, high-quality."
    )
}

/// Number of recipes the prompt asks for
pub const EXPECTED_RECIPE_COUNT: usize = 3;

fn is_complete(recipe: &Recipe) -> bool {
    !recipe.recipe_name.trim().is_empty()
        && !recipe.description.trim().is_empty()
        && !recipe.ingredients.is_empty()
        && !recipe.instructions.is_empty()
}

/// Parse the raw text returned by the model into transient recipes.
///
/// Store-assigned fields and images the model may have invented are dropped.
pub fn parse_generated_recipes(raw_response: &str) -> Result<Vec<Recipe>, CoreError> {
    let recipes: Vec<Recipe> = serde_json::from_str(raw_response.trim()).map_err(|e| {
        tracing::error!("Failed to parse generated recipes: {}", e);
        CoreError::Generation("malformed response".to_string())
    })?;

    if recipes.len() != EXPECTED_RECIPE_COUNT {
        tracing::error!(
            count = recipes.len(),
            "Expected {} generated recipes",
            EXPECTED_RECIPE_COUNT
        );
        return Err(CoreError::Generation("malformed response".to_string()));
    }

    if let Some(recipe) = recipes.iter().find(|r| !is_complete(r)) {
        tracing::error!(recipe_name = %recipe.recipe_name, "Generated recipe is incomplete");
        return Err(CoreError::Generation("malformed response".to_string()));
    }

    Ok(recipes
        .into_iter()
        .map(|recipe| {
            let mut recipe = recipe.into_transient();
            recipe.image_url = None;
            recipe
        })
        .collect())
}
