//! Annotation API port
//!
//! Defines the three remote operations a workflow run needs.

use crate::core::models::{Batch, BatchRequest, Project, ProjectRequest, Task, TaskRequest, TaskType};
use crate::error::ScaleError;

/// Annotation service abstraction
///
/// Every call blocks until the service answers. Implementations do not
/// validate requests locally; the server is the only judge.
pub trait AnnotationApi {
    /// Create a project
    fn create_project(&self, request: &ProjectRequest) -> Result<Project, ScaleError>;

    /// Create a batch inside an existing project
    fn create_batch(&self, request: &BatchRequest) -> Result<Batch, ScaleError>;

    /// Create one task of the given type
    fn create_task(&self, task_type: TaskType, request: &TaskRequest) -> Result<Task, ScaleError>;
}
