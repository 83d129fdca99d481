//! Persisted extension settings.
//!
//! Exactly one value survives page sessions: whether the overlay is
//! enabled. Everything else is ephemeral.

mod file;
mod memory;

pub use file::FileSettings;
pub use memory::MemorySettings;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// The persisted settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the overlay is enabled. Defaults to off.
    #[serde(default)]
    pub enabled: bool,
}

/// Trait for settings storage backends.
///
/// `load` on a backend that has never been written returns the default
/// record rather than an error.
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> SettingsResult<Settings>;
    fn save(&self, settings: &Settings) -> SettingsResult<()>;
}
