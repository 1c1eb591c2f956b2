//! Progress persistence: a small JSON document written after every
//! progression mutation and loaded at startup.
//!
//! The field names are fixed for compatibility with existing saved
//! progress; do not rename them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use draconid_core::enums::Achievement;

use crate::progression::ProgressionLedger;

/// Storage key; the document lives at `<dir>/<key>.json`.
pub const STORAGE_KEY: &str = "draconid-progress";

/// Storage read/write failure. Recovered locally by falling back to a
/// zero ledger; never fatal to the core.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access progress file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse progress file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The persisted progress document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub xp: u64,
    #[serde(rename = "simulationCount")]
    pub simulation_count: u32,
    /// Achievement ids. Unknown ids are skipped on load.
    pub achievements: Vec<String>,
    /// Unix seconds at save time.
    pub timestamp: u64,
}

impl SavedProgress {
    pub fn from_ledger(ledger: &ProgressionLedger, timestamp: u64) -> Self {
        Self {
            xp: ledger.xp(),
            simulation_count: ledger.simulation_count(),
            achievements: ledger.achievements().map(|a| a.as_str().to_string()).collect(),
            timestamp,
        }
    }

    /// Rebuild a ledger, dropping any achievement id the catalog no longer
    /// knows.
    pub fn into_ledger(self) -> ProgressionLedger {
        let achievements = self
            .achievements
            .iter()
            .filter_map(|id| Achievement::parse(id));
        ProgressionLedger::from_parts(self.xp, self.simulation_count, achievements)
    }
}

fn save_path(dir: &Path) -> PathBuf {
    dir.join(format!("{STORAGE_KEY}.json"))
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Write the ledger to `<dir>/draconid-progress.json`.
pub fn save_to_file(dir: &Path, ledger: &ProgressionLedger) -> Result<(), PersistenceError> {
    fs::create_dir_all(dir)?;
    let doc = SavedProgress::from_ledger(ledger, unix_timestamp());
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(save_path(dir), json)?;
    Ok(())
}

/// Read the ledger back from `<dir>/draconid-progress.json`.
pub fn load_from_file(dir: &Path) -> Result<ProgressionLedger, PersistenceError> {
    let json = fs::read_to_string(save_path(dir))?;
    let doc: SavedProgress = serde_json::from_str(&json)?;
    Ok(doc.into_ledger())
}

/// Load saved progress, falling back to a fresh ledger when the file is
/// missing or unreadable.
pub fn load_or_default(dir: &Path) -> ProgressionLedger {
    match load_from_file(dir) {
        Ok(ledger) => ledger,
        Err(err) => {
            warn!("progress load failed, starting fresh: {err}");
            ProgressionLedger::new()
        }
    }
}
