//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `LIFTLOG_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/liftlog`)
///
/// An override is returned as-is. The system default is created if it does
/// not exist yet.
pub fn data_root() -> Result<PathBuf, PathError> {
    // 1. Runtime override (highest priority)
    if let Ok(path) = env::var("LIFTLOG_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    // 2. Default to system data directory
    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;

    let root = data_dir.join("liftlog");

    // Ensure it exists
    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honors_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();

        let _env_guard =
            EnvVarGuard::set("LIFTLOG_DATA_DIR", temp.path().to_string_lossy().as_ref());

        let root = data_root().unwrap();
        assert_eq!(root, temp.path());
    }
}
