//! Ledger snapshots as pretty-printed JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use shared::IncomeEntry;

/// Saves and loads the full ledger at a fixed path.
///
/// The snapshot is the export format too, so it stays human-readable:
/// a pretty-printed array of entries in ledger order.
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every entry to disk, creating parent directories on demand.
    pub fn save(&self, entries: &[IncomeEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write ledger snapshot to {}", self.path.display()))
    }

    /// Read the snapshot back. A missing file is a fresh start, not an
    /// error; a file that exists but does not parse is.
    pub fn load(&self) -> Result<Vec<IncomeEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read ledger snapshot at {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("malformed ledger snapshot at {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_entries() -> Vec<IncomeEntry> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        vec![
            IncomeEntry::new(1709251200000, date, 100.0, 20.0, "09:30".to_string()),
            IncomeEntry::new(1709251200001, date, 50.0, 0.0, "14:00".to_string()),
        ]
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path().join("ledger.json"));
        let entries = sample_entries();

        store.save(&entries).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_missing_snapshot_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path().join("nothing-here.json"));

        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path().join("nested/deeper/ledger.json"));

        store.save(&sample_entries()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn test_snapshot_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLedgerStore::new(dir.path().join("ledger.json"));

        store.save(&sample_entries()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"cashAmount\": 100.0"));
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonLedgerStore::new(path);
        assert!(store.load().is_err());
    }
}
