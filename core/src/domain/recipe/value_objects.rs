use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub ingredients: String,
}

/// Ordering applied to saved recipes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently saved first.
    #[default]
    Date,
    /// Recipe name, ascending.
    Name,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortOrder::Date),
            "name" => Ok(SortOrder::Name),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Date => write!(f, "date"),
            SortOrder::Name => write!(f, "name"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeQuery {
    pub text: String,
    pub order: SortOrder,
}

/// Parameters sent along with every image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub number_of_images: u32,
    pub output_mime_type: String,
    pub aspect_ratio: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            number_of_images: 1,
            output_mime_type: "image/jpeg".to_string(),
            aspect_ratio: "4:3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub base64_data: String,
}

impl GeneratedImage {
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}
