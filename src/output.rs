//! Output formatting for human and JSON modes
//!
//! Human mode streams results as the run goes: the project name once,
//! then per task either the task JSON or the error code and message.
//! JSON mode collects a [`RunReport`] and prints it at the end.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Batch, Project, Task, TaskRequest};
use crate::core::services::{GateIssue, RunObserver, TaskOutcome};
use crate::error::ApiErrorData;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Status of one submitted task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The server created the task
    Created,
    /// The server rejected the task
    Failed,
}

/// Report entry for one attachment
#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    /// Attachment URL
    pub attachment: String,
    /// Created or failed
    pub status: TaskStatus,
    /// The created task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// The rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl From<&TaskOutcome> for TaskReport {
    fn from(outcome: &TaskOutcome) -> Self {
        match &outcome.result {
            Ok(task) => Self {
                attachment: outcome.attachment.clone(),
                status: TaskStatus::Created,
                task: Some(task.clone()),
                error: None,
            },
            Err(err) => Self {
                attachment: outcome.attachment.clone(),
                status: TaskStatus::Failed,
                task: None,
                error: Some(err.into()),
            },
        }
    }
}

/// Machine-readable record of a run (or of a single stage)
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// When the run started (RFC3339)
    pub started_at: String,
    /// Created project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    /// Created batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
    /// Per-attachment results
    pub tasks: Vec<TaskReport>,
    /// Number of tasks created
    pub created: usize,
    /// Number of tasks rejected
    pub failed: usize,
}

impl RunReport {
    /// Empty report stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            ..Self::default()
        }
    }

    /// Print the report as pretty JSON
    pub fn render(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RunObserver for RunReport {
    fn project_created(&mut self, project: &Project) {
        self.project = Some(project.clone());
    }

    fn batch_created(&mut self, batch: &Batch) {
        self.batch = Some(batch.clone());
    }

    fn task_finished(&mut self, outcome: &TaskOutcome) {
        if outcome.is_created() {
            self.created += 1;
        } else {
            self.failed += 1;
        }
        self.tasks.push(outcome.into());
    }
}

/// Streams results to stdout as they arrive
///
/// Only the project name and the per-task results go to stdout. Batch and
/// tally lines are logged by the stages themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanReporter;

impl RunObserver for HumanReporter {
    fn project_created(&mut self, project: &Project) {
        println!("{}", project.name);
    }

    fn task_finished(&mut self, outcome: &TaskOutcome) {
        match &outcome.result {
            Ok(task) => {
                println!("{}", serde_json::to_string_pretty(task).unwrap_or_default());
            },
            Err(err) => {
                println!("{}", err.code);
                println!("{}", err.message);
            },
        }
    }
}

/// Task bodies a run would send, for `preview`
#[derive(Debug, Serialize)]
pub struct PreviewResult<'a> {
    /// One body per attachment
    pub tasks: &'a [TaskRequest],
    /// Gates naming labels outside the label set
    pub gate_issues: Vec<String>,
}

impl<'a> PreviewResult<'a> {
    /// Build from task bodies and gate issues
    #[must_use]
    pub fn new(tasks: &'a [TaskRequest], issues: &[GateIssue]) -> Self {
        Self {
            tasks,
            gate_issues: issues.iter().map(ToString::to_string).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        for task in self.tasks {
            println!("{}", serde_json::to_string_pretty(task).unwrap_or_default());
        }
        for issue in &self.gate_issues {
            println!("{} {issue}", "warning:".yellow().bold());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
