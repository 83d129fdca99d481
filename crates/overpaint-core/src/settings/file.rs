//! File-backed settings for native hosts.

use super::{Settings, SettingsError, SettingsResult, SettingsStore};
use std::fs;
use std::path::PathBuf;

/// Settings stored as a JSON file.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Store settings at the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store settings in the platform data directory,
    /// `<data dir>/overpaint/settings.json`.
    pub fn default_location() -> SettingsResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| SettingsError::Io("could not determine home directory".to_string()))?;
        Ok(Self::new(base.join("overpaint").join("settings.json")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SettingsStore for FileSettings {
    fn load(&self) -> SettingsResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| SettingsError::Io(format!("failed to read {}: {e}", self.path.display())))?;
        serde_json::from_str(&json).map_err(|e| {
            SettingsError::Serialization(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    fn save(&self, settings: &Settings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Io(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| SettingsError::Io(format!("failed to write {}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_default() {
        let dir = tempdir().unwrap();
        let store = FileSettings::new(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileSettings::new(dir.path().join("settings.json"));

        store.save(&Settings { enabled: true }).unwrap();
        assert!(store.load().unwrap().enabled);

        store.save(&Settings { enabled: false }).unwrap();
        assert!(!store.load().unwrap().enabled);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let store = FileSettings::new(dir.path().join("nested").join("settings.json"));
        store.save(&Settings { enabled: true }).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = FileSettings::new(path);
        assert!(matches!(
            store.load(),
            Err(SettingsError::Serialization(_))
        ));
    }
}
