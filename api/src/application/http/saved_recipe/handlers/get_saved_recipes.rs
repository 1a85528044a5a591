use axum::extract::State;
use pantry_chef_core::domain::recipe::{
    entities::Recipe, ports::SavedRecipeService, value_objects::RecipeQuery,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    saved_recipe::validators::GetSavedRecipesParams,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, QueryParams},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSavedRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "saved-recipe",
    summary = "List saved recipes",
    description = "Lists saved recipes matching the search text, most recent first or by name.",
    params(GetSavedRecipesParams),
    responses(
        (status = 200, body = GetSavedRecipesResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn get_saved_recipes(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<GetSavedRecipesParams>,
) -> Result<Response<GetSavedRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_saved_recipes(RecipeQuery {
            text: params.q.unwrap_or_default(),
            order: params.sort.unwrap_or_default(),
        })
        .await;

    Ok(Response::OK(GetSavedRecipesResponse { data: recipes }))
}
