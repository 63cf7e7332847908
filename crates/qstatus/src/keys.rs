//! Namespaced key derivation for status records.

use crate::error::StatusResult;
use serde::Serialize;
use serde_json::Value;

/// Default prefix namespacing all status keys.
pub const DEFAULT_KEY_PREFIX: &str = "qstatus";

/// Key builder deriving namespaced storage keys from a job type and a
/// caller-supplied correlation key.
///
/// Keys are recomputed on every access and never cached. Derivation is
/// deterministic and performs no I/O.
#[derive(Debug, Clone)]
pub struct StatusKeys {
    prefix: String,
}

impl StatusKeys {
    /// Create a new key builder with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Derive the namespaced key for a correlation key under a job type.
    ///
    /// Returns `Ok(None)` when no correlation key is supplied (or it is
    /// null): a job invoked without one opts out of tracking entirely, so
    /// absence is a no-op signal rather than an error.
    ///
    /// The correlation key is canonicalized by a serialize/deserialize round
    /// trip through JSON before rendering, so two representations of the
    /// same logical value (`&str` vs `String`, `u32` vs `i64`) address the
    /// same record. The round trip is the normalization step; do not replace
    /// it with a plain format of the input.
    pub fn derive<K: Serialize>(
        &self,
        job_type: &str,
        correlation_key: Option<&K>,
    ) -> StatusResult<Option<String>> {
        let Some(key) = correlation_key else {
            return Ok(None);
        };

        let canonical: Value = serde_json::from_str(&serde_json::to_string(key)?)?;
        if canonical.is_null() {
            return Ok(None);
        }

        Ok(Some(format!(
            "{}:{}:{}",
            self.prefix,
            job_type,
            key_form(&canonical)
        )))
    }

    /// Wildcard pattern matching every key for a job type.
    pub fn pattern(&self, job_type: &str) -> String {
        format!("{}:{}:*", self.prefix, job_type)
    }

    /// Extract the correlation key from a job's argument payload.
    ///
    /// A missing or null field means the job opted out of tracking.
    pub fn extract<'a>(args: &'a Value, field: &str) -> Option<&'a Value> {
        match args.get(field) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }
}

impl Default for StatusKeys {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

/// String form of a canonicalized correlation key: strings render without
/// quoting, everything else as compact JSON text.
fn key_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
