//! Preference Storage
//!
//! Durable key/value storage for user preferences such as the language code.

use crate::constants::PREFERENCES_FILE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable string key/value storage
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value; `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    ///
    /// Implementations must keep the other stored keys.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept in a TOML file in the configuration directory
#[derive(Debug)]
pub struct TomlPreferences {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlPreferences {
    /// Open the preference file in the platform configuration directory
    pub fn open_default() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(PREFERENCES_FILE);
        Ok(Self::at(path))
    }

    /// Use an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(toml::Table::new());
        }

        Ok(toml::from_str(&content)?)
    }
}

impl PreferenceStore for TomlPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let table = self.load()?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock();

        // An unparsable file is left untouched so its other keys survive
        let mut table = self.load().inspect_err(|e| {
            warn!(error = %e, path = ?self.path, "Preference file unreadable, not saving");
        })?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&table)?)?;
        debug!(key, path = ?self.path, "Preference saved");
        Ok(())
    }
}

/// In-process preferences, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a single stored value
    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.values.lock().insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let prefs = TomlPreferences::at(tmp.path().join("prefs.toml"));
        assert_eq!(prefs.get("lang").expect("get"), None);
    }

    #[test]
    fn set_then_get_round_trips_through_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nested").join("prefs.toml");
        let prefs = TomlPreferences::at(&path);
        prefs.set("lang", "zh-TW").expect("set");

        let reopened = TomlPreferences::at(&path);
        assert_eq!(reopened.get("lang").expect("get").as_deref(), Some("zh-TW"));
    }

    #[test]
    fn set_keeps_other_keys() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("prefs.toml");
        fs::write(&path, "theme = \"dark\"\n").expect("write");

        let prefs = TomlPreferences::at(&path);
        prefs.set("lang", "en").expect("set");

        assert_eq!(prefs.get("theme").expect("get").as_deref(), Some("dark"));
        assert_eq!(prefs.get("lang").expect("get").as_deref(), Some("en"));
    }

    #[test]
    fn corrupt_file_is_an_error_and_left_untouched() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("prefs.toml");
        let corrupt = "theme = \"dark\"\nlang = ";
        fs::write(&path, corrupt).expect("write");

        let prefs = TomlPreferences::at(&path);
        assert!(prefs.get("lang").is_err());
        assert!(prefs.set("lang", "en").is_err());

        assert_eq!(fs::read_to_string(&path).expect("read"), corrupt);
    }

    #[test]
    fn non_string_value_reads_as_absent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("prefs.toml");
        fs::write(&path, "lang = 3\n").expect("write");
        let prefs = TomlPreferences::at(&path);
        assert_eq!(prefs.get("lang").expect("get"), None);
    }

    #[test]
    fn memory_preferences_store_values() {
        let prefs = MemoryPreferences::with_value("lang", "en");
        assert_eq!(prefs.get("lang").expect("get").as_deref(), Some("en"));
        prefs.set("lang", "zh-TW").expect("set");
        assert_eq!(prefs.get("lang").expect("get").as_deref(), Some("zh-TW"));
        assert_eq!(prefs.get("other").expect("get"), None);
    }
}
