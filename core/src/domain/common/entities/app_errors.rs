use thiserror::Error;

/// User-facing message for any failure of the text generation step.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate recipes. The AI chef might be busy. Please try again later.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Please enter some ingredients.")]
    EmptyInput,

    #[error("Recipe generation failed: {0}")]
    Generation(String),

    #[error("Image generation failed: {0}")]
    Image(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
