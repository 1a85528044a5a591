use axum::extract::{Path, State};
use pantry_chef_core::domain::recipe::{entities::Recipe, ports::SavedRecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteSavedRecipeResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    delete,
    path = "/{recipe_name}",
    tag = "saved-recipe",
    summary = "Unsave recipe",
    description = "Removes every saved recipe with this name. Unknown names are ignored.",
    params(
        ("recipe_name" = String, Path, description = "Recipe name"),
    ),
    responses(
        (status = 200, body = DeleteSavedRecipeResponse)
    ),
)]
pub async fn delete_saved_recipe(
    Path(recipe_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSavedRecipeResponse>, ApiError> {
    let recipes = state.service.unsave_recipe(recipe_name).await;

    Ok(Response::OK(DeleteSavedRecipeResponse { data: recipes }))
}
