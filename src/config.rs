//! INI-style configuration: `# comments`, `[Section]` headers and
//! `key = value` pairs. Keys that appear before any section are globals.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::log::LogError;

/// Section holding the logger settings.
pub const LOGGING_SECTION: &str = "Logging";
/// Path of the file sink. Missing or empty means standard error.
pub const LOG_FILE_KEY: &str = "log_file";

#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::ConfigRead`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Lines that are neither headers nor
    /// assignments are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut cfg = Self::empty();
        let mut current_section: Option<String> = None;

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_string();
            let value = value.trim().trim_matches('"').to_string();

            match &current_section {
                None => {
                    cfg.globals.insert(key, value);
                }
                Some(sec) => {
                    cfg.sections.entry(sec.clone()).or_default().insert(key, value);
                }
            }
        }
        cfg
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(String::as_str)
    }

    /// Configured log file path with `~` expanded, if any.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.get_non_empty(LOGGING_SECTION, LOG_FILE_KEY)
            .or_else(|| self.get_global(LOG_FILE_KEY).filter(|s| !s.is_empty()))
            .map(expand_path)
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    let home = || {
        std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from)
    };

    if path_str == "~" {
        return home().unwrap_or_else(|| PathBuf::from(path_str));
    }
    if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        return home().map_or_else(|| PathBuf::from(path_str), |h| h.join(rest));
    }
    PathBuf::from(path_str)
}
