use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipesRequest {
    /// Free-text pantry list, e.g. "chicken breast, broccoli, rice, soy sauce"
    #[validate(length(max = 5000, message = "ingredients must be at most 5000 characters"))]
    pub ingredients: String,
}
