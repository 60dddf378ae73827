//! Persisted display preferences.
//!
//! Only the theme is stored. Document text is never written to disk.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid preferences file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// Reads and writes [`Preferences`] in a directory.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config dir>/charcount`, if the platform has a config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("charcount")))
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    /// Load preferences. A missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, PreferencesError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Preferences::default());
            }
            Err(source) => return Err(PreferencesError::Io { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| PreferencesError::Json { path, source })
    }

    /// Load preferences, logging and falling back to defaults on any error.
    pub fn load_or_default(&self) -> Preferences {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable preferences");
            Preferences::default()
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), PreferencesError> {
        let path = self.path();
        fs::create_dir_all(&self.dir).map_err(|source| PreferencesError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(preferences).map_err(|source| {
            PreferencesError::Json {
                path: path.clone(),
                source,
            }
        })?;
        write_file(&path, &json)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), PreferencesError> {
    fs::write(path, content).map_err(|source| PreferencesError::Io {
        path: path.to_path_buf(),
        source,
    })
}
