//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the client's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/repo-saga/` or `$XDG_CONFIG_HOME/repo-saga/`
/// - **macOS**: `~/Library/Application Support/com.repo-saga.repo-saga/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\repo-saga\repo-saga\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/repo-saga/`
/// - **macOS**: `~/Library/Application Support/com.repo-saga.repo-saga/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\repo-saga\repo-saga\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let nested = tmp.path().join("a").join("b");
        let created = ensure_dir(&nested).expect("create dir");
        assert_eq!(created, nested);
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_dir(&nested).expect("existing dir");
    }
}
