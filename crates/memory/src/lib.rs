//! Shared swarm memory — a key/value store visible to every agent.
//!
//! One store exists per assembled swarm. Writes are last-writer-wins:
//! the store never merges or versions values, it only remembers the
//! most recent one and when it arrived.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A single stored value together with the time it was written.
#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub value: String,
    pub stored_at: DateTime<Utc>,
}

/// The shared key/value store.
///
/// Cloning is cheap; all clones see the same underlying map.
#[derive(Clone)]
pub struct SharedMemory {
    entries: Arc<RwLock<HashMap<String, MemoryEntry>>>,
}

impl SharedMemory {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a value under a key, replacing any previous value.
    pub async fn store(&self, key: impl Into<String>, value: impl Into<String>) {
        let entry = MemoryEntry {
            value: value.into(),
            stored_at: Utc::now(),
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    pub async fn get(&self, key: &str) -> Option<MemoryEntry> {
        self.entries.read().await.get(key).cloned()
    }

    /// Remove a key. Returns whether it was present.
    pub async fn delete(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    /// All stored keys, sorted for stable output.
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Default for SharedMemory {
    fn default() -> Self {
        Self::new()
    }
}
