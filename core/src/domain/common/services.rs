use std::sync::Arc;

use crate::domain::recipe::store::SavedRecipeStore;

/// Entry point for every use case. Cloning is cheap: all collaborators are
/// shared behind `Arc`s, so handlers can hold their own copy.
pub struct Service<LLM, IMG, RS> {
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_client: Arc<IMG>,
    pub(crate) saved_recipes: Arc<SavedRecipeStore<RS>>,
}

impl<LLM, IMG, RS> Service<LLM, IMG, RS> {
    pub fn new(llm_client: LLM, image_client: IMG, saved_recipes: SavedRecipeStore<RS>) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            image_client: Arc::new(image_client),
            saved_recipes: Arc::new(saved_recipes),
        }
    }
}

impl<LLM, IMG, RS> Clone for Service<LLM, IMG, RS> {
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            image_client: Arc::clone(&self.image_client),
            saved_recipes: Arc::clone(&self.saved_recipes),
        }
    }
}
