//! Stats storage backends

use super::Stats;
use serde_json::{Map, Value};
use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the stats record is stored under
pub const STATS_KEY: &str = "wordle_stats";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Stats file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Stats file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read/write access to persisted stats
pub trait StatsStore {
    /// Read the stored stats; a store with nothing saved yields zeroes
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn load(&self) -> Result<Stats, StoreError>;

    /// Replace the stored stats
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn save(&self, stats: &Stats) -> Result<(), StoreError>;
}

/// Stats kept in memory only
#[derive(Debug, Default)]
pub struct MemoryStore {
    stats: Cell<Stats>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(stats: Stats) -> Self {
        Self {
            stats: Cell::new(stats),
        }
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Stats, StoreError> {
        Ok(self.stats.get())
    }

    fn save(&self, stats: &Stats) -> Result<(), StoreError> {
        self.stats.set(*stats);
        Ok(())
    }
}

/// Key-value JSON file with the stats under [`STATS_KEY`]
///
/// Other keys in the file are left untouched. Writes go through a temp
/// file and a rename so a crash never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_atomic(&self, content: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<Stats, StoreError> {
        let mut map = self.read_map()?;
        match map.remove(STATS_KEY) {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Stats::default()),
        }
    }

    fn save(&self, stats: &Stats) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(STATS_KEY.to_string(), serde_json::to_value(stats)?);
        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        self.write_atomic(&json)?;
        tracing::debug!(path = %self.path.display(), "Saved stats");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("stats.json"))
    }

    #[test]
    fn missing_file_yields_zero_stats() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), Stats::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let stats = Stats { wins: 4, losses: 2 };

        store.save(&stats).unwrap();
        assert_eq!(store.load().unwrap(), stats);

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[STATS_KEY]["wins"], 4);
        assert_eq!(raw[STATS_KEY]["losses"], 2);
    }

    #[test]
    fn save_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"theme": "light"}"#).unwrap();

        store.save(&Stats { wins: 1, losses: 0 }).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["theme"], "light");
        assert_eq!(raw[STATS_KEY]["wins"], 1);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/stats.json"));
        store.save(&Stats { wins: 0, losses: 3 }).unwrap();
        assert_eq!(store.load().unwrap().losses, 3);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn empty_file_yields_zero_stats() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load().unwrap(), Stats::default());
    }

    #[test]
    fn record_result_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        super::super::record_result(&store, false).unwrap();
        let stats = super::super::record_result(&store, true).unwrap();
        assert_eq!(stats, Stats { wins: 1, losses: 1 });

        // A fresh handle sees the same data
        assert_eq!(store_in(&dir).load().unwrap(), stats);
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new(Stats { wins: 9, losses: 1 });
        assert_eq!(store.load().unwrap().wins, 9);
        store.save(&Stats::default()).unwrap();
        assert_eq!(store.load().unwrap(), Stats::default());
    }
}
