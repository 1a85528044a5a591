use axum::extract::{Path, State};
use pantry_chef_core::domain::recipe::ports::SavedRecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedRecipeStatus {
    pub saved: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSavedRecipeStatusResponse {
    pub data: SavedRecipeStatus,
}

#[utoipa::path(
    get,
    path = "/{recipe_name}",
    tag = "saved-recipe",
    summary = "Is recipe saved",
    params(
        ("recipe_name" = String, Path, description = "Recipe name"),
    ),
    responses(
        (status = 200, body = GetSavedRecipeStatusResponse)
    ),
)]
pub async fn get_saved_recipe_status(
    Path(recipe_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetSavedRecipeStatusResponse>, ApiError> {
    let saved = state.service.is_recipe_saved(recipe_name).await;

    Ok(Response::OK(GetSavedRecipeStatusResponse {
        data: SavedRecipeStatus { saved },
    }))
}
