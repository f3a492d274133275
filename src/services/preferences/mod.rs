//! Load/save of the persisted language preference.
//!
//! One JSON document at the platform config location. Reads fall back to
//! defaults (the cause is logged, never surfaced); writes propagate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use crate::models::preferences::Preferences;

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Store at the platform config location, e.g.
    /// `~/.config/booking-calendar/preferences.json` on Linux.
    pub fn at_default_location() -> Self {
        let path = ProjectDirs::from("com", "BookingCalendar", "BookingCalendar")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files fall back to defaults.
    pub fn load(&self) -> Preferences {
        match self.try_load() {
            Ok(prefs) => prefs,
            Err(err) => {
                log::warn!("Using default preferences: {err}");
                Preferences::default()
            }
        }
    }

    fn try_load(&self) -> Result<Preferences, LoadError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::language::Language;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join(PREFERENCES_FILE));

        let mut prefs = store.load();
        prefs.set_language(Language::English);
        store.save(&prefs).unwrap();

        assert_eq!(store.load().language(), Language::English);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join("nested").join(PREFERENCES_FILE));
        store.save(&Preferences::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn unreadable_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "not json at all").unwrap();

        let store = PreferencesStore::at(path);
        assert_eq!(store.load(), Preferences::default());
    }
}
