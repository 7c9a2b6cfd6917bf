//! Store implementations backed by flat JSON files.
//!
//! These implementations encapsulate all filesystem access. The backing
//! file path is confined to this module and never exposed through the
//! port trait signatures.

mod json_exercise_store;

pub use json_exercise_store::JsonExerciseStore;
