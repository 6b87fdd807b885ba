//! Batch model
//!
//! A batch groups the tasks of one submission run and shares a callback.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /batches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRequest {
    /// Batch name
    pub name: String,
    /// Owning project name
    pub project: String,
    /// Callback destination (URL or email) notified as tasks complete
    pub callback: String,
    /// Whether this is a calibration batch
    pub calibration_batch: bool,
    /// Whether this is a self-label batch
    pub self_label_batch: bool,
}

impl BatchRequest {
    /// Create a regular batch request
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        project: impl Into<String>,
        callback: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            callback: callback.into(),
            calibration_batch: false,
            self_label_batch: false,
        }
    }
}

/// A batch as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Batch name
    pub name: String,
    /// Owning project name
    #[serde(default)]
    pub project: String,
    /// Batch status (`staging`, `in_progress`, `completed`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Callback destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
