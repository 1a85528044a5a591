use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{SAVED_RECIPES_KEY, ports::RecipeStorage},
};

/// Keeps the saved recipe slot as `<data_dir>/pantryChefSavedRecipes.json`
#[derive(Debug, Clone)]
pub struct FileRecipeStorage {
    path: PathBuf,
}

impl FileRecipeStorage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir
                .as_ref()
                .join(format!("{}.json", SAVED_RECIPES_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeStorage for FileRecipeStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn read(&self) -> Result<Option<String>, CoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Persistence(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self, value), fields(path = %self.path.display(), bytes = value.len()))]
    async fn write(&self, value: String) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::Persistence(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        tokio::fs::write(&self.path, value).await.map_err(|e| {
            CoreError::Persistence(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_slot_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileRecipeStorage::new(dir.path());

        assert_eq!(storage.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_overwrites_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileRecipeStorage::new(dir.path().join("nested"));

        storage.write("[1]".to_string()).await.unwrap();
        storage.write("[2]".to_string()).await.unwrap();

        assert_eq!(storage.read().await.unwrap().as_deref(), Some("[2]"));
        assert!(storage.path().ends_with("pantryChefSavedRecipes.json"));
    }
}
