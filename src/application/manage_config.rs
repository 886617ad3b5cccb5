//! Config management use case

use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemRepository};

const KEYS: &str = "entries_file, settings_file, top_tags";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = &self.repository.config;

        match key {
            "entries_file" => Ok(config.entries_file.clone()),
            "settings_file" => Ok(config.settings_file.clone()),
            "top_tags" => Ok(config.top_tags.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodjourError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, KEYS
            ))),
        }
    }

    /// Set a config value. Changing a file name does not move existing data.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.config.clone();

        match key {
            "entries_file" => config.entries_file = value.to_string(),
            "settings_file" => config.settings_file = value.to_string(),
            "top_tags" => {
                config.top_tags = value.parse().map_err(|_| {
                    MoodjourError::Config(format!(
                        "Invalid top_tags: '{}'. Expected a non-negative number",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(MoodjourError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodjourError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, KEYS
                )));
            }
        }

        config.validate()?;
        self.repository.config = config;
        self.repository.save_config()
    }

    /// List all config values
    pub fn list(&self) -> &Config {
        &self.repository.config
    }
}
