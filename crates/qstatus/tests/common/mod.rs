//! Common test infrastructure for tracker integration tests.

use async_trait::async_trait;
use qstatus::{StatusRecord, StatusResult, StatusStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory expiring key-value store with a manually advanced clock.
///
/// Implements the same SET-with-expiry / GET / KEYS / DEL semantics the
/// Redis store delegates to, so tracker behavior (including record expiry)
/// can be exercised without a live Redis. Clones share state, so a test can
/// keep a handle for clock control after handing the store to a tracker.
#[derive(Clone)]
pub struct MemoryStatusStore {
    ttl: Duration,
    state: Arc<Mutex<State>>,
}

struct State {
    /// Fake monotonic clock, in elapsed time since store creation.
    now: Duration,
    /// Stored payload and its expiry deadline on the fake clock.
    entries: HashMap<String, (String, Duration)>,
}

impl MemoryStatusStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Arc::new(Mutex::new(State {
                now: Duration::ZERO,
                entries: HashMap::new(),
            })),
        }
    }

    /// Advance the fake clock, aging every stored record.
    pub fn advance(&self, by: Duration) {
        self.state.lock().unwrap().now += by;
    }

    /// Plant a raw payload under a key, bypassing record serialization.
    pub fn insert_raw(&self, key: &str, payload: &str) {
        let mut state = self.state.lock().unwrap();
        let expires_at = state.now + self.ttl;
        state
            .entries
            .insert(key.to_string(), (payload.to_string(), expires_at));
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn write(&self, key: &str, record: &StatusRecord) -> StatusResult<()> {
        let payload = serde_json::to_string(record)?;
        let mut state = self.state.lock().unwrap();
        let expires_at = state.now + self.ttl;
        state.entries.insert(key.to_string(), (payload, expires_at));
        Ok(())
    }

    async fn read(&self, key: &str) -> StatusResult<StatusRecord> {
        let state = self.state.lock().unwrap();
        match state.entries.get(key) {
            Some((payload, expires_at)) if *expires_at > state.now => {
                Ok(serde_json::from_str(payload)?)
            }
            _ => Ok(StatusRecord::default()),
        }
    }

    async fn list(&self, pattern: &str) -> StatusResult<Vec<String>> {
        // Only prefix patterns ("prefix:*") are needed by the tracker.
        let prefix = pattern.trim_end_matches('*');
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .iter()
            .filter(|(key, (_, expires_at))| key.starts_with(prefix) && *expires_at > state.now)
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn delete_all(&self, keys: &[String]) -> StatusResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut state = self.state.lock().unwrap();
        for key in keys {
            state.entries.remove(key);
        }
        Ok(())
    }
}
