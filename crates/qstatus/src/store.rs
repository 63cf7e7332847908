//! Storage abstraction for status records.

use crate::error::StatusResult;
use crate::record::StatusRecord;
use async_trait::async_trait;

/// Expiring key-value persistence for status records.
///
/// This trait abstracts the store so the tracker can be exercised without a
/// live Redis. The production implementation is
/// [`RedisStatusStore`](crate::redis::RedisStatusStore).
///
/// Concurrency is delegated entirely to the backing store: concurrent
/// writers to the same key resolve by last-write-wins, and `list` followed
/// by `delete_all` is not transactional.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Store a record under `key`, unconditionally overwriting any existing
    /// value and (re)arming the configured expiry.
    async fn write(&self, key: &str, record: &StatusRecord) -> StatusResult<()>;

    /// Fetch the record stored under `key`.
    ///
    /// An absent or expired key yields the empty default record. A present
    /// but undecodable payload is a
    /// [`Serialization`](crate::StatusError::Serialization) error, never the
    /// empty record.
    async fn read(&self, key: &str) -> StatusResult<StatusRecord>;

    /// Enumerate the currently stored keys matching `pattern`.
    ///
    /// Eventually consistent with concurrent writers.
    async fn list(&self, pattern: &str) -> StatusResult<Vec<String>>;

    /// Bulk-delete the given keys. No-op on an empty set; a malformed
    /// zero-argument delete must never reach the store.
    async fn delete_all(&self, keys: &[String]) -> StatusResult<()>;
}
