//! Status tracker configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the status tracking system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Redis connection configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Tracking behavior configuration.
    #[serde(default)]
    pub tracking: TrackingConfig,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            redis: RedisConfig::default(),
            tracking: TrackingConfig::default(),
        }
    }
}

/// Redis connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL.
    #[serde(default = "default_redis_url")]
    pub url: String,

    /// Connection pool size.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Key prefix for all status keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            pool_size: default_pool_size(),
            connect_timeout_secs: default_connect_timeout(),
            key_prefix: default_key_prefix(),
        }
    }
}

impl RedisConfig {
    /// Returns the connection timeout as Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_pool_size() -> usize {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_key_prefix() -> String {
    crate::keys::DEFAULT_KEY_PREFIX.to_string()
}

/// Tracking behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Record time-to-live in seconds. Every write refreshes the expiry.
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Name of the field in a job's argument payload that carries the
    /// correlation key.
    #[serde(default = "default_key_field")]
    pub key_field: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            key_field: default_key_field(),
        }
    }
}

impl TrackingConfig {
    /// Returns the record TTL as Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

fn default_ttl() -> u64 {
    86400 // 24 hours
}

fn default_key_field() -> String {
    crate::tracker::DEFAULT_KEY_FIELD.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StatusConfig::default();
        assert_eq!(config.redis.url, "redis://localhost:6379");
        assert_eq!(config.redis.pool_size, 10);
        assert_eq!(config.redis.key_prefix, "qstatus");
        assert_eq!(config.tracking.ttl_secs, 86400);
        assert_eq!(config.tracking.key_field, "correlation_key");
    }

    #[test]
    fn test_ttl_duration() {
        let config = TrackingConfig::default();
        assert_eq!(config.ttl(), Duration::from_secs(86400));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: StatusConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.tracking.ttl_secs, 86400);
    }

    #[test]
    fn test_deserialize_overrides() {
        let config: StatusConfig = serde_json::from_str(
            r#"{"tracking": {"ttl_secs": 60, "key_field": "request_id"}}"#,
        )
        .unwrap();
        assert_eq!(config.tracking.ttl_secs, 60);
        assert_eq!(config.tracking.key_field, "request_id");
        assert_eq!(config.redis.pool_size, 10);
    }
}
