use super::handlers::delete_saved_recipe::{__path_delete_saved_recipe, delete_saved_recipe};
use super::handlers::get_saved_recipe_status::{
    __path_get_saved_recipe_status, get_saved_recipe_status,
};
use super::handlers::get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes};
use super::handlers::save_recipe::{__path_save_recipe, save_recipe};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_saved_recipes,
    save_recipe,
    delete_saved_recipe,
    get_saved_recipe_status
))]
pub struct SavedRecipeApiDoc;

pub fn saved_recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/saved-recipes", state.args.server.root_path),
            get(get_saved_recipes),
        )
        .route(
            &format!("{}/saved-recipes", state.args.server.root_path),
            post(save_recipe),
        )
        .route(
            &format!("{}/saved-recipes/{{recipe_name}}", state.args.server.root_path),
            get(get_saved_recipe_status),
        )
        .route(
            &format!("{}/saved-recipes/{{recipe_name}}", state.args.server.root_path),
            delete(delete_saved_recipe),
        )
}
