//! Theme preference use case

use crate::domain::theme::{Theme, THEME_KEY};
use crate::infrastructure::JournalRepository;
use std::str::FromStr;
use tracing::warn;

/// Reads and writes user settings. Failures fall back to defaults.
pub struct SettingsService<'a, R: JournalRepository> {
    repository: &'a R,
}

impl<'a, R: JournalRepository> SettingsService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        SettingsService { repository }
    }

    /// Stored theme, or light when unset, unreadable or unrecognized
    pub fn theme(&self) -> Theme {
        match self.repository.load_setting(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(&value).unwrap_or_else(|err| {
                warn!(%err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(error = %err, "failed to read settings, using default theme");
                Theme::default()
            }
        }
    }

    /// Persist the theme. Returns whether it was written.
    pub fn set_theme(&self, theme: Theme) -> bool {
        match self.repository.save_setting(THEME_KEY, theme.as_str()) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to save theme");
                false
            }
        }
    }
}
