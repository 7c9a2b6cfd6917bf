//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, filesystem, etc.).

mod exercise;

// Re-export exercise types at the domain level for convenience
pub use exercise::{Exercise, ExerciseDraft, Week};
