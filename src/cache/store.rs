use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

use super::CacheEntry;

/// Unbounded key -> response map governed only by a fixed TTL.
///
/// Expired entries are never evicted; they read as absent and get
/// overwritten by the next successful fetch for the same key.
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get_fresh(&self, key: &str, now: Instant) -> Option<Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value().clone())
    }

    pub async fn insert(&self, key: impl Into<String>, value: Value, now: Instant) {
        let mut entries = self.entries.write().await;
        entries.insert(key.into(), CacheEntry::new(value, now));
    }

    /// Stored entries, including expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Keys whose entries are still fresh at `now`.
    pub async fn fresh_keys(&self, now: Instant) -> Vec<String> {
        let entries = self.entries.read().await;
        let mut keys: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_fresh(now, self.ttl))
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }
}
