//! `StatusStore` implementation over a Redis connection pool.

use crate::error::StatusResult;
use crate::record::StatusRecord;
use crate::store::StatusStore;
use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::debug;

/// Redis-backed status store.
///
/// Records are stored as UTF-8 JSON strings under the derived namespaced
/// keys, each write armed with the configured TTL so stale records
/// self-clean.
pub struct RedisStatusStore {
    /// Redis connection pool.
    pool: Pool,

    /// Record time-to-live.
    ttl: Duration,
}

impl RedisStatusStore {
    /// Create a new store with the given record TTL.
    pub fn new(pool: Pool, ttl: Duration) -> Self {
        Self { pool, ttl }
    }
}

#[async_trait]
impl StatusStore for RedisStatusStore {
    async fn write(&self, key: &str, record: &StatusRecord) -> StatusResult<()> {
        let mut conn = self.pool.get().await?;
        let payload = serde_json::to_string(record)?;
        let ttl_secs = self.ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, payload, ttl_secs).await?;

        debug!("Wrote status record at '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn read(&self, key: &str) -> StatusResult<StatusRecord> {
        let mut conn = self.pool.get().await?;

        let payload: Option<String> = conn.get(key).await?;

        match payload {
            // Decode failures propagate: corruption must not read as
            // "never tracked".
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => {
                debug!("No status record at '{}'", key);
                Ok(StatusRecord::default())
            }
        }
    }

    async fn list(&self, pattern: &str) -> StatusResult<Vec<String>> {
        let mut conn = self.pool.get().await?;

        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut conn)
            .await?;

        debug!("Found {} keys matching '{}'", keys.len(), pattern);
        Ok(keys)
    }

    async fn delete_all(&self, keys: &[String]) -> StatusResult<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.pool.get().await?;
        let deleted: i64 = conn.del(keys).await?;

        debug!("Deleted {} status keys", deleted);
        Ok(())
    }
}
