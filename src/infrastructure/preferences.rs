// src/infrastructure/preferences.rs
use crate::application::ThemeStore;
use crate::domain::{DomainError, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Deserialize, Serialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

/// Theme preference kept in a small JSON file
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/boardview/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("boardview").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Preferences>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Storage(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| DomainError::Storage(format!("Invalid preferences file: {e}")))
    }
}

impl ThemeStore for FilePreferences {
    fn load_theme(&self) -> Result<Option<Theme>, DomainError> {
        Ok(self.read()?.and_then(|prefs| prefs.theme))
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), DomainError> {
        let mut prefs = self.read().ok().flatten().unwrap_or_default();
        prefs.theme = Some(theme);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::Storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
        let content = serde_json::to_string_pretty(&prefs)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| {
            DomainError::Storage(format!("Failed to write {}: {e}", self.path.display()))
        })?;

        debug!(path = ?self.path, %theme, "Theme preference saved");
        Ok(())
    }
}
