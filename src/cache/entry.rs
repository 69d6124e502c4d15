use std::time::{Duration, Instant};

use serde_json::Value;

/// A decoded upstream response and the moment it was stored.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

impl CacheEntry {
    pub fn new(value: Value, stored_at: Instant) -> Self {
        Self { value, stored_at }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Age relative to `now`; zero if `now` predates the entry.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    /// Valid iff `now - stored_at < ttl`.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}
