//! In-memory settings backend.

use super::{Settings, SettingsError, SettingsResult, SettingsStore};
use std::sync::RwLock;

/// In-memory settings for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemorySettings {
    record: RwLock<Option<Settings>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> SettingsResult<Settings> {
        let record = self
            .record
            .read()
            .map_err(|e| SettingsError::Io(format!("lock error: {e}")))?;
        Ok(record.unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> SettingsResult<()> {
        let mut record = self
            .record
            .write()
            .map_err(|e| SettingsError::Io(format!("lock error: {e}")))?;
        *record = Some(*settings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_store_reads_default() {
        let store = MemorySettings::new();
        assert_eq!(store.load().unwrap(), Settings { enabled: false });
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemorySettings::new();
        store.save(&Settings { enabled: true }).unwrap();
        assert!(store.load().unwrap().enabled);
    }
}
