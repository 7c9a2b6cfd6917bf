//! Path utilities for liftlog data directories.
//!
//! This module provides the canonical path resolution for all liftlog
//! components:
//! - Application data root
//! - Exercises storage file
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod error;
mod platform;
mod storage;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Data root
pub use platform::data_root;

// Exercises storage file
pub use storage::{EXERCISES_FILE_NAME, exercises_file};
