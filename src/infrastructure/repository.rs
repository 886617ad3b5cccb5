//! File system repository

use crate::domain::JournalEntry;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::config::{Config, DATA_DIR};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "MOODJOUR_ROOT";

/// Durable storage for entries and settings.
///
/// Entries are always loaded and saved as a whole collection.
pub trait JournalRepository {
    /// Load every stored entry. A journal with no entries file yet is empty.
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Replace the stored collection
    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()>;

    fn load_setting(&self, key: &str) -> Result<Option<String>>;

    fn save_setting(&self, key: &str, value: &str) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    pub config: Config,
}

impl FileSystemRepository {
    /// Create a repository for `root` with an already loaded config
    pub fn new(root: PathBuf, config: Config) -> Self {
        FileSystemRepository { root, config }
    }

    /// Open an initialized journal at `root`
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Ok(FileSystemRepository::new(root, config))
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODJOUR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Self::open(path);
            } else {
                return Err(MoodjourError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'moodjour init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    DATA_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodjourError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    /// Create the data directory and write the config
    pub fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(MoodjourError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        self.config.validate()?;
        fs::create_dir(self.root.join(DATA_DIR))?;
        self.config.save_to_dir(&self.root)
    }

    pub fn save_config(&self) -> Result<()> {
        self.config.save_to_dir(&self.root)
    }

    pub fn entries_path(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(&self.config.entries_file)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(&self.config.settings_file)
    }

    fn load_settings(&self) -> Result<BTreeMap<String, String>> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.moodjour-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("data.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let path = self.entries_path();
        if !path.exists() {
            debug!(path = %path.display(), "no entries file yet");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let entries: Vec<JournalEntry> = serde_json::from_str(&contents)?;
        debug!(count = entries.len(), path = %path.display(), "loaded entries");
        Ok(entries)
    }

    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        let path = self.entries_path();
        let contents = serde_json::to_string_pretty(entries)?;
        Self::write_atomic(&path, &contents)?;
        debug!(count = entries.len(), path = %path.display(), "saved entries");
        Ok(())
    }

    fn load_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_settings()?.remove(key))
    }

    fn save_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut settings = self.load_settings()?;
        settings.insert(key.to_string(), value.to_string());

        let contents = serde_json::to_string_pretty(&settings)?;
        Self::write_atomic(&self.settings_path(), &contents)
    }
}
