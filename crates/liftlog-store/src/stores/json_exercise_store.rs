//! Flat-file JSON implementation of the `ExerciseStore` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use liftlog_core::{Exercise, ExerciseStore, StoreError};

/// Flat-file JSON implementation of the [`ExerciseStore`] trait.
///
/// The whole collection lives in a single pretty-printed JSON array on disk.
/// A missing file reads as an empty collection. Saves go through a temp file
/// renamed into place, so a crash mid-write never leaves a truncated array
/// behind.
pub struct JsonExerciseStore {
    path: PathBuf,
}

impl JsonExerciseStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not have to exist yet; parent directories are created
    /// on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ExerciseStore for JsonExerciseStore {
    async fn load(&self) -> Result<Vec<Exercise>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn save(&self, exercises: &[Exercise]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Storage(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(exercises)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Write the temp file next to the target, then rename over it
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(())
    }
}
