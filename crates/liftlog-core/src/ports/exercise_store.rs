//! Exercise store trait definition.
//!
//! This port defines the interface for exercise persistence. Implementations
//! must handle all storage details internally.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::Exercise;

/// Store for the exercise collection.
///
/// The collection is always read and written as a whole; there is no
/// record-level access. Implementations are responsible for all storage
/// details (file layout, atomicity of writes, directory creation).
///
/// # Design Rules
///
/// - An absent backing file is an empty collection, not an error
/// - `save` replaces the entire collection
/// - No locking here; callers serialize their own read-modify-write cycles
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Load the full exercise collection.
    ///
    /// Returns an empty vector when nothing has been stored yet.
    async fn load(&self) -> Result<Vec<Exercise>, StoreError>;

    /// Replace the stored collection with `exercises`.
    async fn save(&self, exercises: &[Exercise]) -> Result<(), StoreError>;
}
