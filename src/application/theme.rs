// src/application/theme.rs
use crate::domain::{DomainError, Theme};
use tracing::{debug, warn};

/// Persistent home of the theme preference
pub trait ThemeStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load_theme(&self) -> Result<Option<Theme>, DomainError>;

    fn save_theme(&mut self, theme: Theme) -> Result<(), DomainError>;
}

pub struct ThemeSwitcher<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSwitcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the saved theme; unreadable or missing preferences mean light.
    pub fn load_theme(&mut self) -> Theme {
        self.current = match self.store.load_theme() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                warn!(%err, "Could not read theme preference");
                Theme::default()
            }
        };
        debug!(theme = %self.current, "Theme loaded");
        self.current
    }

    /// Flips light/dark and persists the choice.
    ///
    /// The switch takes effect even when saving fails; the error is returned
    /// so the caller can report it.
    pub fn toggle_theme(&mut self) -> Result<Theme, DomainError> {
        self.current = self.current.toggled();
        self.store.save_theme(self.current)?;
        Ok(self.current)
    }
}
