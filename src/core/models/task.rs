//! Task model
//!
//! One task is one unit of annotation work over one attachment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{AnnotationAttributes, Geometries};

/// Kind of attachment a task points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    /// A still image
    #[default]
    Image,
}

/// Body of `POST /task/imageannotation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRequest {
    /// Batch the task is added to
    pub batch: String,
    /// Where the finished task is reported
    pub callback_url: String,
    /// Attachment kind
    pub attachment_type: AttachmentType,
    /// Attachment location (URL)
    pub attachment: String,
    /// Enabled geometry types
    pub geometries: Geometries,
    /// Whether annotators label each geometry
    pub with_labels: bool,
    /// Conditional follow-up questions, keyed by name
    pub annotation_attributes: AnnotationAttributes,
}

/// A task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned task id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Task status (`pending`, `completed`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
