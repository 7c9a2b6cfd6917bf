//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No filesystem or I/O types in any signature
//! - A miss is not an error: lookups surface as `Option`/`bool` at the
//!   service layer, never as a store failure

pub mod exercise_store;

use thiserror::Error;

pub use exercise_store::ExerciseStore;

/// Domain-specific errors for storage operations.
///
/// This error type abstracts away storage implementation details (filesystem
/// errors, JSON syntax errors) and provides a clean interface for services to
/// handle storage failures. Both variants are fatal to the operation that hit
/// them; there is no retry semantics at this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (unreadable or unwritable file, directory
    /// creation failure).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed (malformed persisted data).
    #[error("Serialization error: {0}")]
    Serialization(String),
}
