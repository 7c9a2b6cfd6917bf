//! Exercise service - orchestrates all exercise operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Exercise, ExerciseDraft};
use crate::ports::{ExerciseStore, StoreError};

/// Service for exercise operations.
///
/// Every operation is a full load of the collection, an in-memory compute,
/// and (for mutations) a full save back through the injected
/// [`ExerciseStore`]. There is no caching between calls; the file is the
/// single source of truth.
///
/// Mutations serialize their load-mutate-save cycle behind a writer lock so
/// that concurrently dispatched requests cannot interleave and drop each
/// other's writes. Reads take no lock.
pub struct ExerciseService {
    store: Arc<dyn ExerciseStore>,
    /// Serializes create/update/delete; reads stay lock-free.
    write_lock: Mutex<()>,
}

impl ExerciseService {
    /// Create a new exercise service with the given store.
    pub fn new(store: Arc<dyn ExerciseStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// List all exercises in stored order.
    pub async fn list(&self) -> Result<Vec<Exercise>, StoreError> {
        self.store.load().await
    }

    /// Get an exercise by id. A miss is `None`, not an error.
    pub async fn get(&self, id: &str) -> Result<Option<Exercise>, StoreError> {
        Ok(self.store.load().await?.into_iter().find(|e| e.id == id))
    }

    /// Exercises assigned to the given week number.
    ///
    /// Entries without a week never match.
    pub async fn by_week(&self, week_number: i32) -> Result<Vec<Exercise>, StoreError> {
        Ok(self
            .store
            .load()
            .await?
            .into_iter()
            .filter(|e| {
                e.week
                    .as_ref()
                    .is_some_and(|w| w.week_number == week_number)
            })
            .collect())
    }

    /// Exercises whose category matches `category`, ASCII case-insensitively.
    ///
    /// Entries without a category never match.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Exercise>, StoreError> {
        Ok(self
            .store
            .load()
            .await?
            .into_iter()
            .filter(|e| {
                e.category
                    .as_ref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect())
    }

    /// Group exercises by their stored category value.
    ///
    /// Keys preserve the stored casing ("Push" and "PUSH" are distinct
    /// groups). Entries without a category are excluded.
    pub async fn grouped_by_category(&self) -> Result<BTreeMap<String, Vec<Exercise>>, StoreError> {
        let mut groups: BTreeMap<String, Vec<Exercise>> = BTreeMap::new();
        for exercise in self.store.load().await? {
            let Some(category) = exercise.category.clone() else {
                continue;
            };
            groups.entry(category).or_default().push(exercise);
        }
        Ok(groups)
    }

    /// Group exercises by week number. Entries without a week are excluded.
    pub async fn grouped_by_week(&self) -> Result<BTreeMap<i32, Vec<Exercise>>, StoreError> {
        let mut groups: BTreeMap<i32, Vec<Exercise>> = BTreeMap::new();
        for exercise in self.store.load().await? {
            let Some(week_number) = exercise.week.as_ref().map(|w| w.week_number) else {
                continue;
            };
            groups.entry(week_number).or_default().push(exercise);
        }
        Ok(groups)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a new exercise, assigning it a fresh random id.
    ///
    /// Returns the stored record, id included.
    pub async fn create(&self, draft: ExerciseDraft) -> Result<Exercise, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut exercises = self.store.load().await?;
        let exercise = Exercise::from_draft(Uuid::new_v4().to_string(), draft);
        exercises.push(exercise.clone());
        self.store.save(&exercises).await?;
        tracing::debug!(id = %exercise.id, "created exercise");
        Ok(exercise)
    }

    /// Replace the exercise with the given id wholesale.
    ///
    /// The draft's fields overwrite every stored field; only the id is kept.
    /// Returns `None` without touching the collection when the id is unknown.
    pub async fn update(
        &self,
        id: &str,
        draft: ExerciseDraft,
    ) -> Result<Option<Exercise>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut exercises = self.store.load().await?;
        let Some(slot) = exercises.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        *slot = Exercise::from_draft(id.to_string(), draft);
        let updated = slot.clone();
        self.store.save(&exercises).await?;
        tracing::debug!(%id, "updated exercise");
        Ok(Some(updated))
    }

    /// Remove the exercise with the given id.
    ///
    /// Returns whether a removal occurred. A miss does not rewrite the
    /// collection.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut exercises = self.store.load().await?;
        let len_before = exercises.len();
        exercises.retain(|e| e.id != id);
        if exercises.len() == len_before {
            return Ok(false);
        }
        self.store.save(&exercises).await?;
        tracing::debug!(%id, "deleted exercise");
        Ok(true)
    }
}
