//! Configuration management

use crate::domain::analytics::DEFAULT_TAG_LIMIT;
use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding config and data files inside a journal root
pub const DATA_DIR: &str = ".moodjour";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Entries file name inside `.moodjour/`
    #[serde(default = "default_entries_file")]
    pub entries_file: String,
    /// Settings file name inside `.moodjour/`
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// Number of tags shown by `stats`
    #[serde(default = "default_top_tags")]
    pub top_tags: usize,
    pub created: DateTime<Utc>,
}

fn default_entries_file() -> String {
    "journal_data.json".to_string()
}

fn default_settings_file() -> String {
    "user_settings.json".to_string()
}

fn default_top_tags() -> usize {
    DEFAULT_TAG_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entries_file: default_entries_file(),
            settings_file: default_settings_file(),
            top_tags: default_top_tags(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .moodjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodjourError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MoodjourError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .moodjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// File names must stay inside the data directory
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("entries_file", &self.entries_file),
            ("settings_file", &self.settings_file),
        ] {
            if name.trim().is_empty() || name.contains(['/', '\\']) || name == ".." {
                return Err(MoodjourError::Config(format!(
                    "Invalid {}: '{}'. Expected a plain file name",
                    key, name
                )));
            }
        }

        if self.entries_file == self.settings_file || self.entries_file == CONFIG_FILE {
            return Err(MoodjourError::Config(
                "entries_file must differ from settings_file and config.toml".to_string(),
            ));
        }
        if self.settings_file == CONFIG_FILE {
            return Err(MoodjourError::Config(
                "settings_file must differ from config.toml".to_string(),
            ));
        }

        Ok(())
    }
}
