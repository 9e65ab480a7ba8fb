use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::app_state::PersistedSettings;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "QuadCoreCogitator";
const APP_NAME: &str = "QuadCoreCogitator";
const SETTINGS_FILE: &str = "settings.json";

/// Flat key-value store holding the form's raw values between sessions.
pub trait SettingsStore {
    fn load(&self) -> Result<PersistedSettings, PersistError>;
    fn save(&self, settings: &PersistedSettings) -> Result<(), PersistError>;
}

/// JSON object on disk, in the platform config directory unless a path is given.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    pub fn new() -> Self {
        let path = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<PersistedSettings, PersistError> {
        let path = self.path.as_ref().ok_or(PersistError::StorageUnavailable)?;
        match fs::read_to_string(path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PersistedSettings::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, settings: &PersistedSettings) -> Result<(), PersistError> {
        let path = self.path.as_ref().ok_or(PersistError::StorageUnavailable)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Reads saved settings; a broken or missing store simply yields nothing.
pub fn load_settings(store: &dyn SettingsStore) -> Option<PersistedSettings> {
    match store.load() {
        Ok(settings) => {
            tracing::debug!(entries = settings.entries.len(), "loaded persisted settings");
            Some(settings)
        }
        Err(err) => {
            tracing::warn!("could not read persisted settings: {err}");
            None
        }
    }
}

/// Fire-and-forget save. Failures are logged and otherwise ignored.
pub fn persist_best_effort(store: &dyn SettingsStore, settings: &PersistedSettings) {
    if let Err(err) = store.save(settings) {
        tracing::warn!("failed to persist settings: {err}");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
