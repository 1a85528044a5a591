use std::time::Duration;

use crate::{
    domain::{
        common::{PantryChefConfig, services::Service},
        recipe::store::SavedRecipeStore,
    },
    infrastructure::{
        llm::{GeminiLLMClient, ImagenClient},
        storage::FileRecipeStorage,
    },
};

pub type PantryChefService = Service<GeminiLLMClient, ImagenClient, FileRecipeStorage>;

/// Wire the production adapters and load the saved recipes once.
pub async fn create_service(config: PantryChefConfig) -> Result<PantryChefService, anyhow::Error> {
    let timeout = Duration::from_secs(config.llm.request_timeout_secs);

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
        config.llm.api_base_url.clone(),
        timeout,
    )?;
    let image_client = ImagenClient::new(
        config.llm.gemini_api_key,
        config.llm.imagen_model,
        config.llm.api_base_url,
        timeout,
    )?;

    let storage = FileRecipeStorage::new(&config.storage.data_dir);
    tracing::info!(path = %storage.path().display(), "Using saved recipe storage");
    let saved_recipes = SavedRecipeStore::load(storage).await;

    Ok(Service::new(llm_client, image_client, saved_recipes))
}
