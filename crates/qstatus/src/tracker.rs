//! Lifecycle hooks and the application-facing read path.

use crate::config::StatusConfig;
use crate::error::StatusResult;
use crate::keys::StatusKeys;
use crate::record::{FailureMeta, StatusRecord};
use crate::store::StatusStore;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Default name of the argument field carrying the correlation key.
pub const DEFAULT_KEY_FIELD: &str = "correlation_key";

/// Side-channel status tracker for background jobs.
///
/// The job-queue collaborator invokes the three lifecycle hooks
/// ([`before_enqueue`](Self::before_enqueue),
/// [`after_perform`](Self::after_perform),
/// [`on_failure`](Self::on_failure)) with the same argument payload used to
/// invoke the job; each hook independently re-derives the storage key from
/// that payload. Jobs whose arguments carry no correlation key opt out of
/// tracking, and every hook is then a no-op.
///
/// The tracker holds no in-process mutable state; every operation is a
/// single request to the store. Hook errors must be surfaced on the queue's
/// own error channel and never conflated with the job's execution outcome:
/// a failed status write does not make a successful job a failed one.
///
/// # Example
///
/// ```rust,ignore
/// use qstatus::{create_pool, RedisStatusStore, StatusConfig, StatusTracker};
/// use serde_json::json;
///
/// let config = StatusConfig::default();
/// let pool = create_pool(&config.redis).await?;
/// let store = RedisStatusStore::new(pool, config.tracking.ttl());
/// let tracker = StatusTracker::with_config(store, &config);
///
/// let args = json!({"correlation_key": "order-42", "path": "/tmp/in.csv"});
/// tracker.before_enqueue("csv_import", &args).await?;
/// // ... job runs ...
/// tracker.after_perform("csv_import", &args).await?;
///
/// let record = tracker.record_status("csv_import", &"order-42").await?;
/// ```
pub struct StatusTracker<S: StatusStore> {
    /// Backing store.
    store: S,

    /// Namespaced key builder.
    keys: StatusKeys,

    /// Argument field carrying the correlation key.
    key_field: String,
}

impl<S: StatusStore> StatusTracker<S> {
    /// Create a tracker with the default key prefix and key field.
    pub fn new(store: S) -> Self {
        Self {
            store,
            keys: StatusKeys::default(),
            key_field: DEFAULT_KEY_FIELD.to_string(),
        }
    }

    /// Create a tracker from configuration.
    pub fn with_config(store: S, config: &StatusConfig) -> Self {
        Self {
            store,
            keys: StatusKeys::new(config.redis.key_prefix.clone()),
            key_field: config.tracking.key_field.clone(),
        }
    }

    /// Hook: a job is about to be enqueued. Writes `IN_PROGRESS`.
    ///
    /// A re-enqueue under an already-tracked correlation key legally resets
    /// the record back to `IN_PROGRESS` (overwrite, not merge).
    pub async fn before_enqueue(&self, job_type: &str, args: &Value) -> StatusResult<()> {
        self.transition(job_type, args, StatusRecord::in_progress())
            .await
    }

    /// Hook: a job completed successfully. Writes `COMPLETED`.
    pub async fn after_perform(&self, job_type: &str, args: &Value) -> StatusResult<()> {
        self.transition(job_type, args, StatusRecord::completed())
            .await
    }

    /// Hook: a job's execution raised a failure. Writes `FAILED` with the
    /// serialized failure as `meta`.
    pub async fn on_failure<E: std::error::Error>(
        &self,
        job_type: &str,
        args: &Value,
        error: &E,
    ) -> StatusResult<()> {
        let meta = FailureMeta::from_error(error).encode()?;
        self.transition(job_type, args, StatusRecord::failed(meta))
            .await
    }

    /// Read the current status for a correlation key.
    ///
    /// Returns the empty default record when the key was never tracked, has
    /// expired, or canonicalizes to null.
    pub async fn record_status<K: Serialize>(
        &self,
        job_type: &str,
        correlation_key: &K,
    ) -> StatusResult<StatusRecord> {
        match self.keys.derive(job_type, Some(correlation_key))? {
            Some(key) => self.store.read(&key).await,
            None => Ok(StatusRecord::default()),
        }
    }

    /// List every currently tracked key under a job type.
    pub async fn list_tracked_keys(&self, job_type: &str) -> StatusResult<Vec<String>> {
        self.store.list(&self.keys.pattern(job_type)).await
    }

    /// Delete every tracked record under a job type.
    ///
    /// Enumerate-then-delete is not atomic: a key written between the two
    /// calls may survive. Succeeds on a job type with no tracked keys.
    pub async fn clear_all_tracked(&self, job_type: &str) -> StatusResult<()> {
        let keys = self.list_tracked_keys(job_type).await?;
        self.store.delete_all(&keys).await
    }

    /// Derive the key from the args and write the record, or do nothing if
    /// the args carry no correlation key.
    async fn transition(
        &self,
        job_type: &str,
        args: &Value,
        record: StatusRecord,
    ) -> StatusResult<()> {
        let correlation_key = StatusKeys::extract(args, &self.key_field);
        match self.keys.derive(job_type, correlation_key)? {
            Some(key) => self.store.write(&key, &record).await,
            None => {
                debug!(
                    job_type,
                    "Job arguments carry no '{}' field, skipping status tracking", self.key_field
                );
                Ok(())
            }
        }
    }
}
