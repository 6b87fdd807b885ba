//! Workflow runner
//!
//! Runs the three stages in order: project, batch, tasks. Only vendor
//! errors from task creation are absorbed; they are reported and the loop
//! moves to the next attachment. Everything else aborts the run.

use log::{debug, info, warn};

use crate::core::models::{Batch, Project, Task, Workflow};
use crate::core::ports::AnnotationApi;
use crate::error::{ApiError, RunError, ScaleError};

use super::payload;

/// Result of submitting one attachment
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    /// Attachment the task was built for
    pub attachment: String,
    /// Created task, or the vendor's rejection
    pub result: Result<Task, ApiError>,
}

impl TaskOutcome {
    /// Whether the task was created
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a full run created
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Created project
    pub project: Project,
    /// Created batch
    pub batch: Batch,
    /// Per-attachment outcomes, in submission order
    pub outcomes: Vec<TaskOutcome>,
}

/// Receives progress as a run goes
///
/// All methods default to doing nothing.
pub trait RunObserver {
    /// The project exists
    fn project_created(&mut self, _project: &Project) {}

    /// The batch exists
    fn batch_created(&mut self, _batch: &Batch) {}

    /// One attachment has been submitted
    fn task_finished(&mut self, _outcome: &TaskOutcome) {}
}

/// Stage 1: create the project
pub fn create_project<A: AnnotationApi + ?Sized>(
    api: &A,
    workflow: &Workflow,
) -> Result<Project, RunError> {
    let request = payload::project_request(workflow);
    debug!("Creating project '{}' ({})", request.name, request.task_type);
    let project = api.create_project(&request).map_err(|source| RunError::Project {
        name: request.name.clone(),
        source,
    })?;
    info!("Created project '{}'", project.name);
    Ok(project)
}

/// Stage 2: create the batch
pub fn create_batch<A: AnnotationApi + ?Sized>(
    api: &A,
    workflow: &Workflow,
) -> Result<Batch, RunError> {
    let request = payload::batch_request(workflow);
    debug!("Creating batch '{}' in project '{}'", request.name, request.project);
    let batch = api.create_batch(&request).map_err(|source| RunError::Batch {
        name: request.name.clone(),
        source,
    })?;
    info!("Created batch '{}'", batch.name);
    Ok(batch)
}

/// Stage 3: submit one task per attachment
///
/// A vendor rejection is recorded and the loop continues. A transport or
/// decoding failure stops the loop and is returned.
pub fn submit_tasks<A: AnnotationApi + ?Sized>(
    api: &A,
    workflow: &Workflow,
    observer: &mut dyn RunObserver,
) -> Result<Vec<TaskOutcome>, RunError> {
    for issue in payload::gate_issues(workflow) {
        warn!("{issue}");
    }

    let task_type = workflow.project.task_type;
    let mut outcomes = Vec::with_capacity(workflow.attachments.len());

    for (index, attachment) in workflow.attachments.iter().enumerate() {
        let request = payload::task_request(workflow, attachment);
        debug!(
            "Submitting task {}/{} for {attachment}",
            index + 1,
            workflow.attachments.len()
        );

        let result = match api.create_task(task_type, &request) {
            Ok(task) => {
                info!("Created task {}", task.task_id.as_deref().unwrap_or("<no id>"));
                Ok(task)
            },
            Err(ScaleError::Api(err)) => {
                warn!("Task for {attachment} rejected: {err}");
                Err(err)
            },
            Err(err) => return Err(RunError::Tasks(err)),
        };

        let outcome = TaskOutcome {
            attachment: attachment.clone(),
            result,
        };
        observer.task_finished(&outcome);
        outcomes.push(outcome);
    }

    let created = outcomes.iter().filter(|o| o.is_created()).count();
    let failed = outcomes.len() - created;
    if failed == 0 {
        info!("{created} of {} task(s) created", outcomes.len());
    } else {
        info!("{created} of {} task(s) created, {failed} failed", outcomes.len());
    }

    Ok(outcomes)
}

/// Run all three stages
pub fn run<A: AnnotationApi + ?Sized>(
    api: &A,
    workflow: &Workflow,
    observer: &mut dyn RunObserver,
) -> Result<RunSummary, RunError> {
    let project = create_project(api, workflow)?;
    observer.project_created(&project);

    let batch = create_batch(api, workflow)?;
    observer.batch_created(&batch);

    let outcomes = submit_tasks(api, workflow, observer)?;

    Ok(RunSummary {
        project,
        batch,
        outcomes,
    })
}
