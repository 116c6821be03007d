//! Run history persisted to LocalStorage
//!
//! Reference `ScoreSink`: keeps the most recent runs (newest first) with
//! the color the player wore when they earned them.

use serde::{Deserialize, Serialize};

use crate::services::ScoreSink;

/// Maximum number of runs to keep
pub const MAX_HISTORY: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    /// Player fill color for the run
    pub color: String,
    /// Unix timestamp (ms) when the run ended
    pub timestamp: f64,
}

/// Recent-run history, newest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreHistory {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "moonhop_scores";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished run and trim to the cap
    pub fn add_score(&mut self, score: u32, color: &str, timestamp: f64) {
        self.entries.insert(
            0,
            ScoreEntry {
                score,
                color: color.to_string(),
                timestamp,
            },
        );
        self.entries.truncate(MAX_HISTORY);
    }

    /// Best score on record (if any)
    pub fn best(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load history from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(history) = serde_json::from_str::<ScoreHistory>(&json) {
                    log::info!("Loaded {} past runs", history.entries.len());
                    return history;
                }
            }
        }

        log::info!("No run history found, starting fresh");
        Self::new()
    }

    /// Save history to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Run history saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(target_arch = "wasm32")]
    fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms() -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

impl ScoreSink for ScoreHistory {
    fn notify_run_ended(&mut self, score: u32, color: &str) {
        self.add_score(score, color, Self::now_ms());
        self.save();
    }
}
