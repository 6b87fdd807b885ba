//! Project model
//!
//! A project is the named container all batches and tasks live in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TaskType;

/// Parameters applied to every task of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectParams {
    /// Instructions shown to annotators (HTML, usually an embedded document)
    pub instruction: String,
}

/// Body of `POST /projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRequest {
    /// Task type every task in the project shares
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Project name (unique per account)
    pub name: String,
    /// Project-level task parameters
    pub params: ProjectParams,
    /// Whether this is a Rapid project
    pub rapid: bool,
    /// Whether this is a Studio project
    pub studio: bool,
}

impl ProjectRequest {
    /// Create a standard (non-Rapid, non-Studio) project request
    #[must_use]
    pub fn new(name: impl Into<String>, task_type: TaskType, instruction: impl Into<String>) -> Self {
        Self {
            task_type,
            name: name.into(),
            params: ProjectParams {
                instruction: instruction.into(),
            },
            rapid: false,
            studio: false,
        }
    }
}

/// A project as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Task type, when echoed back
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    /// Creation timestamp as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
