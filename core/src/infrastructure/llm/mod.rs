use std::time::Duration;

use reqwest::Client;

use crate::domain::common::entities::app_errors::CoreError;

pub mod gemini_client;
pub mod imagen_client;

pub use gemini_client::GeminiLLMClient;
pub use imagen_client::ImagenClient;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub(crate) fn build_http_client(timeout: Duration) -> Result<Client, CoreError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        CoreError::InternalServerError
    })
}
