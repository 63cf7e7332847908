//! qstatus - Side-channel status tracking for background jobs
//!
//! A Redis-backed tracker recording the lifecycle state of asynchronously
//! executed jobs under caller-supplied correlation keys:
//! - Namespaced key derivation from job type + correlation key
//! - Lifecycle hooks for the host queue (enqueue, success, failure)
//! - Read/list/clear operations for application code
//! - Fixed 24h record expiry so stale entries self-clean
//!
//! Jobs enqueued without a correlation key opt out of tracking; all hooks
//! and reads for them are no-ops. Reading an absent or expired key returns
//! the empty default record rather than an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use qstatus::{create_pool, RedisStatusStore, StatusConfig, StatusTracker};
//! use serde_json::json;
//!
//! let config = StatusConfig::default();
//! let pool = create_pool(&config.redis).await?;
//! let store = RedisStatusStore::new(pool, config.tracking.ttl());
//! let tracker = StatusTracker::with_config(store, &config);
//!
//! // Wired into the host queue's lifecycle callbacks:
//! let args = json!({"correlation_key": "order-42"});
//! tracker.before_enqueue("csv_import", &args).await?;
//!
//! // Application read path:
//! let record = tracker.record_status("csv_import", &"order-42").await?;
//! assert!(record.is_tracked());
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod record;
pub mod redis;
pub mod store;
pub mod tracker;

pub use config::{RedisConfig, StatusConfig, TrackingConfig};
pub use error::{StatusError, StatusResult};
pub use keys::{StatusKeys, DEFAULT_KEY_PREFIX};
pub use record::{FailureMeta, StatusRecord, StatusValue};
pub use crate::redis::{create_pool, RedisStatusStore};
pub use store::StatusStore;
pub use tracker::{StatusTracker, DEFAULT_KEY_FIELD};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::record::{StatusRecord, StatusValue};
    pub use crate::store::StatusStore;
    pub use crate::tracker::StatusTracker;
    pub use crate::{StatusError, StatusResult};
}
