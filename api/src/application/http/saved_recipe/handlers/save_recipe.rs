use axum::extract::State;
use pantry_chef_core::domain::recipe::{entities::Recipe, ports::SavedRecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    saved_recipe::validators::SaveRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveRecipeResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "saved-recipe",
    summary = "Save recipe",
    description = "Keeps a recipe. Saving a name that is already kept leaves the collection unchanged.",
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = SaveRecipeValidator
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let recipes = state.service.save_recipe(Recipe::from(payload)).await;

    Ok(Response::Created(SaveRecipeResponse { data: recipes }))
}
