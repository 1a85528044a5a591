use crate::application::http::{
    recipe::router::RecipeApiDoc, saved_recipe::router::SavedRecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry Chef API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/saved-recipes", api = SavedRecipeApiDoc),
    )
)]
pub struct ApiDoc;
