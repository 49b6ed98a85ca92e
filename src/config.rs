//! Runtime configuration
//!
//! Resolved once at startup from command-line flags and the environment.

use crate::stats::JsonFileStore;
use crate::wordlists::{self, Dictionary, loader};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const HOME_ENV: &str = "PALABRLE_HOME";

const STATS_FILE: &str = "stats.json";
const LOG_FILE: &str = "palabrle.log";

/// Color scheme for the TUI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub words_path: Option<PathBuf>,
    pub theme: ThemeChoice,
    pub verbose: bool,
}

impl Config {
    /// Build the configuration, filling in the data directory if not given
    #[must_use]
    pub fn resolve(
        data_dir: Option<PathBuf>,
        words_path: Option<PathBuf>,
        theme: ThemeChoice,
        verbose: bool,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| {
            default_data_dir(std::env::var_os(HOME_ENV), std::env::var_os("HOME"))
        });
        Self {
            data_dir,
            words_path,
            theme,
            verbose,
        }
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// Stats store backed by the data directory
    #[must_use]
    pub fn stats_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.stats_path())
    }

    /// Load the word list: the `--words` file if given, else the embedded one
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or has no valid words.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        match &self.words_path {
            Some(path) => load_dictionary_file(path),
            None => Ok(wordlists::embedded_dictionary()?),
        }
    }
}

fn load_dictionary_file(path: &Path) -> Result<Dictionary> {
    let words = loader::load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    tracing::info!(count = words.len(), path = %path.display(), "Loaded word list");
    Dictionary::new(words).with_context(|| format!("Word list {} is unusable", path.display()))
}

fn default_data_dir(
    override_dir: Option<std::ffi::OsString>,
    home: Option<std::ffi::OsString>,
) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(".palabrle"),
        None => PathBuf::from(".palabrle"),
    }
}
