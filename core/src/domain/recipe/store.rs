use tokio::sync::Mutex;
use tracing::{debug, error, instrument, warn};

use crate::domain::{
    common::now_millis,
    recipe::{
        entities::Recipe, ports::RecipeStorage, query::query_recipes, value_objects::RecipeQuery,
    },
};

/// Owns the saved recipe collection and mirrors it to one storage slot.
///
/// The collection is loaded once in [`SavedRecipeStore::load`]. Every
/// mutation rewrites the slot while still holding the lock, so writes never
/// interleave.
pub struct SavedRecipeStore<S> {
    storage: S,
    recipes: Mutex<Vec<Recipe>>,
}

impl<S> SavedRecipeStore<S>
where
    S: RecipeStorage,
{
    /// Read the persisted collection. Missing or unreadable data yields an
    /// empty store instead of an error.
    #[instrument(skip(storage))]
    pub async fn load(storage: S) -> Self {
        let recipes = match storage.read().await {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Recipe>>(&blob) {
                Ok(recipes) => recipes,
                Err(e) => {
                    warn!("Failed to load saved recipes, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Failed to read saved recipes: {}", e);
                Vec::new()
            }
        };

        debug!(count = recipes.len(), "Saved recipes loaded");

        Self {
            storage,
            recipes: Mutex::new(recipes),
        }
    }

    /// Overwrite the slot with `all`. Best effort: errors are logged only.
    async fn save(&self, all: &[Recipe]) {
        let blob = match serde_json::to_string(all) {
            Ok(blob) => blob,
            Err(e) => {
                error!("Failed to serialize saved recipes: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.write(blob).await {
            error!("Failed to save recipes: {}", e);
        }
    }

    /// Append `recipe` unless one with the same name is already saved.
    #[instrument(skip(self, recipe), fields(recipe_name = %recipe.recipe_name))]
    pub async fn add(&self, recipe: Recipe) -> Vec<Recipe> {
        let mut recipes = self.recipes.lock().await;

        if recipes.iter().any(|r| r.recipe_name == recipe.recipe_name) {
            debug!("Recipe already saved");
            return recipes.clone();
        }

        recipes.push(recipe.captured_at(now_millis()));
        self.save(&recipes).await;

        recipes.clone()
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, recipe_name: &str) -> Vec<Recipe> {
        let mut recipes = self.recipes.lock().await;

        let before = recipes.len();
        recipes.retain(|r| r.recipe_name != recipe_name);

        if recipes.len() != before {
            self.save(&recipes).await;
        }

        recipes.clone()
    }

    pub async fn query(&self, query: &RecipeQuery) -> Vec<Recipe> {
        let recipes = self.recipes.lock().await;
        query_recipes(&recipes, query)
    }

    pub async fn contains(&self, recipe_name: &str) -> bool {
        self.recipes
            .lock()
            .await
            .iter()
            .any(|r| r.recipe_name == recipe_name)
    }

    /// Snapshot in insertion order
    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Ingredient, ports::MockRecipeStorage, value_objects::SortOrder},
    };
    use crate::infrastructure::storage::FileRecipeStorage;

    fn recipe(name: &str) -> Recipe {
        Recipe::new(
            name.to_string(),
            "Tasty.".to_string(),
            vec![Ingredient {
                name: "rice".to_string(),
                quantity: "1 cup".to_string(),
            }],
            vec!["Step one.".to_string(), "Step two.".to_string()],
        )
    }

    #[tokio::test]
    async fn test_load_missing_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;

        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileRecipeStorage::new(dir.path());
        storage.write("{not json".to_string()).await.unwrap();

        let store = SavedRecipeStore::load(storage).await;

        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_wrong_shape_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileRecipeStorage::new(dir.path());
        storage
            .write(r#"{"recipeName": "Not an array"}"#.to_string())
            .await
            .unwrap();

        let store = SavedRecipeStore::load(storage).await;

        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_is_idempotent_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;

        store.add(recipe("Apple Pie")).await;
        let recipes = store.add(recipe("Apple Pie")).await;

        assert_eq!(recipes.len(), 1);
        assert!(recipes[0].saved_at.is_some());
        assert!(recipes[0].id.is_some());
    }

    #[tokio::test]
    async fn test_add_ignores_incoming_saved_at() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;

        let mut stale = recipe("Stale");
        stale.saved_at = Some(7);
        let recipes = store.add(stale).await;

        assert_ne!(recipes[0].saved_at, Some(7));
    }

    #[tokio::test]
    async fn test_add_keeps_first_saved_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;

        let first = store.add(recipe("Soup")).await[0].clone();
        let again = store.add(recipe("Soup")).await[0].clone();

        assert_eq!(first.saved_at, again.saved_at);
        assert_eq!(first.id, again.id);
    }

    #[tokio::test]
    async fn test_remove_unknown_name_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;
        store.add(recipe("Curry")).await;

        let before = store.list().await;
        let after = store.remove("Lasagne").await;

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_remove_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;
        store.add(recipe("Curry")).await;
        store.add(recipe("Dal")).await;

        let recipes = store.remove("Curry").await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].recipe_name, "Dal");
        assert!(!store.contains("Curry").await);
    }

    #[tokio::test]
    async fn test_collection_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;
        store.add(recipe("Banana Bread")).await;
        store.add(recipe("Apple Pie")).await;
        let saved = store.list().await;
        drop(store);

        let reloaded = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;

        assert_eq!(reloaded.list().await, saved);
        assert_eq!(
            reloaded.list().await[0].instructions,
            vec!["Step one.", "Step two."]
        );
    }

    #[tokio::test]
    async fn test_query_sorts_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = SavedRecipeStore::load(FileRecipeStorage::new(dir.path())).await;
        store.add(recipe("Banana Bread")).await;
        store.add(recipe("Apple Pie")).await;

        let recipes = store
            .query(&RecipeQuery {
                text: String::new(),
                order: SortOrder::Name,
            })
            .await;

        let names: Vec<_> = recipes.iter().map(|r| r.recipe_name.as_str()).collect();
        assert_eq!(names, vec!["Apple Pie", "Banana Bread"]);
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let mut storage = MockRecipeStorage::new();
        storage.expect_read().times(1).returning(|| {
            Box::pin(ready(Err(CoreError::Persistence(
                "disk unavailable".to_string(),
            ))))
        });
        storage.expect_write().times(2).returning(|_| {
            Box::pin(ready(Err(CoreError::Persistence(
                "quota exceeded".to_string(),
            ))))
        });

        let store = SavedRecipeStore::load(storage).await;
        let recipes = store.add(recipe("Paella")).await;
        store.remove("Paella").await;

        assert_eq!(recipes.len(), 1);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_every_mutation_writes_the_whole_collection() {
        let mut storage = MockRecipeStorage::new();
        storage
            .expect_read()
            .returning(|| Box::pin(ready(Ok(None))));
        storage
            .expect_write()
            .withf(|blob| {
                serde_json::from_str::<Vec<Recipe>>(blob)
                    .map(|saved| saved.len() == 1 && saved[0].recipe_name == "Paella")
                    .unwrap_or(false)
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(()))));
        storage
            .expect_write()
            .withf(|blob| blob == "[]")
            .times(1)
            .returning(|_| Box::pin(ready(Ok(()))));

        let store = SavedRecipeStore::load(storage).await;
        store.add(recipe("Paella")).await;
        store.add(recipe("Paella")).await;
        store.remove("Risotto").await;
        store.remove("Paella").await;
    }
}
