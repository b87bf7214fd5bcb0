//! Best-score persistence
//!
//! The core's only external resource: a single integer. It is read once at
//! construction and written through immediately whenever it rises; there is
//! no buffering and no transaction. Storage failures are logged and
//! swallowed inside the store; they must never reach gameplay.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the best score lives between sessions
pub trait HighScoreStore {
    /// Read the persisted best, 0 when nothing is stored yet
    fn load(&mut self) -> u32;
    /// Persist a new best. Must not panic; failures stay inside the store.
    fn save(&mut self, best: u32);
}

/// Volatile store for tests and hosts without persistence
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryStore {
    pub best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
    }
}

/// On-disk envelope, versioned by field name only
#[derive(Debug, Serialize, Deserialize)]
struct BestRecord {
    best: u32,
}

/// JSON-file-backed store for native hosts
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<BestRecord>(&json) {
                Ok(record) => {
                    log::info!("Loaded best score {} from {}", record.best, self.path.display());
                    record.best
                }
                Err(e) => {
                    log::warn!("Corrupt high score file {}: {e}", self.path.display());
                    0
                }
            },
            Err(_) => {
                log::info!("No high score file at {}, starting fresh", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Ok(json) = serde_json::to_string(&BestRecord { best }) {
            if let Err(e) = std::fs::write(&self.path, json) {
                log::warn!("Failed to write {}: {e}", self.path.display());
            }
        }
    }
}
