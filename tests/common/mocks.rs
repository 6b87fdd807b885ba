//! Mock implementation of the annotation API port
//!
//! Records every call and answers from configurable rules, without I/O.

use std::cell::RefCell;

use labelrig::core::models::{
    Batch, BatchRequest, Project, ProjectRequest, Task, TaskRequest, TaskType,
};
use labelrig::core::ports::AnnotationApi;
use labelrig::error::{ApiError, ScaleError};
use serde_json::Map;

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Project(String),
    Batch(String),
    Task(String),
}

/// How the mock answers task creation for an attachment
type TaskRule = Box<dyn Fn(&str) -> Result<(), ScaleError>>;

/// Mock implementation of `AnnotationApi`
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    project_error: Option<ApiError>,
    batch_error: Option<ApiError>,
    task_rule: TaskRule,
}

impl MockApi {
    /// Accept everything
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            project_error: None,
            batch_error: None,
            task_rule: Box::new(|_| Ok(())),
        }
    }

    /// Reject project creation
    pub fn failing_project(mut self, code: u16, message: &str) -> Self {
        self.project_error = Some(ApiError::new(code, message));
        self
    }

    /// Reject batch creation
    pub fn failing_batch(mut self, code: u16, message: &str) -> Self {
        self.batch_error = Some(ApiError::new(code, message));
        self
    }

    /// Decide task creation per attachment
    pub fn with_task_rule(mut self, rule: impl Fn(&str) -> Result<(), ScaleError> + 'static) -> Self {
        self.task_rule = Box::new(rule);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationApi for MockApi {
    fn create_project(&self, request: &ProjectRequest) -> Result<Project, ScaleError> {
        self.calls.borrow_mut().push(Call::Project(request.name.clone()));
        if let Some(err) = &self.project_error {
            return Err(err.clone().into());
        }
        Ok(Project {
            name: request.name.clone(),
            task_type: Some(request.task_type.to_string()),
            created_at: None,
            extra: Map::new(),
        })
    }

    fn create_batch(&self, request: &BatchRequest) -> Result<Batch, ScaleError> {
        self.calls.borrow_mut().push(Call::Batch(request.name.clone()));
        if let Some(err) = &self.batch_error {
            return Err(err.clone().into());
        }
        Ok(Batch {
            name: request.name.clone(),
            project: request.project.clone(),
            status: Some("staging".to_string()),
            callback: Some(request.callback.clone()),
            extra: Map::new(),
        })
    }

    fn create_task(&self, _task_type: TaskType, request: &TaskRequest) -> Result<Task, ScaleError> {
        let n = {
            let mut calls = self.calls.borrow_mut();
            calls.push(Call::Task(request.attachment.clone()));
            calls.len()
        };
        (self.task_rule)(&request.attachment)?;
        Ok(Task {
            task_id: Some(format!("task-{n}")),
            status: Some("pending".to_string()),
            extra: Map::new(),
        })
    }
}
