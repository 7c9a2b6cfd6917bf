#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Exercise, ExerciseDraft, Week};
pub use ports::{ExerciseStore, StoreError};
pub use services::ExerciseService;

// Re-export path utilities
pub use paths::{EXERCISES_FILE_NAME, PathError, data_root, exercises_file};

// Silence unused dev-dependency warnings for test-only crates
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
