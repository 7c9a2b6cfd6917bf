//! Storage file path resolution.
//!
//! Provides the canonical path to the exercises JSON file.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the exercise collection inside the data root.
pub const EXERCISES_FILE_NAME: &str = "exercises.json";

/// Get the path to the exercises storage file.
///
/// Returns the path to `exercises.json` in the user data directory.
pub fn exercises_file() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(EXERCISES_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_exercises_file_lives_in_data_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();

        let _env_guard =
            EnvVarGuard::set("LIFTLOG_DATA_DIR", temp.path().to_string_lossy().as_ref());

        let file = exercises_file().unwrap();
        assert!(file.to_string_lossy().ends_with("exercises.json"));
        assert_eq!(file.parent(), Some(temp.path()));
    }
}
