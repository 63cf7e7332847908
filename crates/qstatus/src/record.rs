//! Status record and wire format.

use crate::error::StatusResult;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked job occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusValue {
    /// Job has been enqueued and has not finished yet.
    InProgress,
    /// Job finished successfully.
    Completed,
    /// Job execution raised a failure.
    Failed,
}

/// A stored status record.
///
/// Serialized as a JSON mapping with a `status` field and, on the failure
/// path, a `meta` field holding an opaque serialized failure description.
/// The default record (no status) represents an absent or expired key;
/// callers cannot distinguish "never tracked" from "tracked then expired".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Current lifecycle state, if the key is tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusValue>,

    /// Serialized failure description. Present only when `status` is FAILED.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

impl StatusRecord {
    /// Record written when a job is enqueued.
    pub fn in_progress() -> Self {
        Self {
            status: Some(StatusValue::InProgress),
            meta: None,
        }
    }

    /// Record written when a job completes successfully.
    pub fn completed() -> Self {
        Self {
            status: Some(StatusValue::Completed),
            meta: None,
        }
    }

    /// Record written when a job fails.
    pub fn failed(meta: String) -> Self {
        Self {
            status: Some(StatusValue::Failed),
            meta: Some(meta),
        }
    }

    /// Returns true if this record holds a tracked status (as opposed to the
    /// empty record returned for absent keys).
    pub fn is_tracked(&self) -> bool {
        self.status.is_some()
    }
}

/// Failure description stored in a FAILED record's `meta` field.
///
/// The stored form is an opaque JSON string; this type fixes the shape this
/// crate writes without constraining what other writers may store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureMeta {
    /// Type name of the raised error.
    pub class: String,

    /// Display message of the raised error.
    pub message: String,
}

impl FailureMeta {
    /// Capture the type name and message of a raised error.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        Self {
            class: std::any::type_name::<E>().to_string(),
            message: error.to_string(),
        }
    }

    /// Serialize into the opaque string stored in `meta`.
    pub fn encode(&self) -> StatusResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a `meta` string written by this crate.
    pub fn decode(meta: &str) -> StatusResult<Self> {
        Ok(serde_json::from_str(meta)?)
    }
}
