//! Score store — injected key-value persistence for the high score

use std::collections::HashMap;

use thiserror::Error;

/// Errors a score store implementation may surface
///
/// The engine never propagates these into game state; a failed load falls
/// back to 0 and a failed save is logged and dropped.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key-value store for persisted integer scores
///
/// Durable backends (platform preferences, files, databases) are the
/// host's concern; this crate ships only the in-memory implementation.
pub trait ScoreStore {
    /// Load the value stored under `key`, defaulting to 0 when absent
    fn load(&self, key: &str) -> Result<u32, StoreError>;

    /// Persist `value` under `key`
    fn save(&mut self, key: &str, value: u32) -> Result<(), StoreError>;
}

/// In-memory score store
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    values: HashMap<String, u32>,
}

impl MemoryScoreStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry
    pub fn with_value(key: impl Into<String>, value: u32) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value);
        store
    }

    /// Raw lookup, `None` when the key was never written
    pub fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, key: &str) -> Result<u32, StoreError> {
        Ok(self.values.get(key).copied().unwrap_or(0))
    }

    fn save(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_defaults_to_zero() {
        let store = MemoryScoreStore::new();
        assert_eq!(store.load("HighScore").unwrap(), 0);
        assert_eq!(store.get("HighScore"), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryScoreStore::new();
        store.save("HighScore", 800).unwrap();
        assert_eq!(store.load("HighScore").unwrap(), 800);
        assert_eq!(store.get("HighScore"), Some(800));
    }

    #[test]
    fn test_seeded_store() {
        let store = MemoryScoreStore::with_value("HighScore", 1200);
        assert_eq!(store.load("HighScore").unwrap(), 1200);
    }
}
