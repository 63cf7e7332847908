//! Status tracking error types.

use thiserror::Error;

/// Result type for status tracking operations.
pub type StatusResult<T> = Result<T, StatusError>;

/// Status tracking errors.
#[derive(Debug, Error)]
pub enum StatusError {
    /// Redis error.
    #[error("Redis error: {0}")]
    Store(#[from] redis::RedisError),

    /// Redis pool error.
    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    /// A stored payload or correlation key could not be (de)serialized.
    ///
    /// On the read path this is distinct from an absent record: an absent or
    /// expired key yields an empty record, while a present-but-undecodable
    /// payload surfaces here so corruption is never mistaken for "never
    /// tracked".
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StatusError {
    /// Returns true if the error is a transport-level failure reaching the
    /// store (as opposed to bad data or bad configuration).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StatusError::Store(_) | StatusError::Pool(_))
    }
}
