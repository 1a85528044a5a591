use axum::extract::State;
use pantry_chef_core::domain::recipe::{
    entities::Recipe, ports::RecipeGenerationService, value_objects::GenerateRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipes from pantry ingredients",
    description = "Asks the text model for recipes based on the given ingredients and illustrates each one. A failed illustration leaves that recipe without an image.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 400, body = ApiErrorResponse, description = "Blank ingredient list"),
        (status = 502, body = ApiErrorResponse, description = "The text model failed or returned malformed data")
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: recipes }))
}
