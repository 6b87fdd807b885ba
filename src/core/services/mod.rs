//! Business logic services
//!
//! - [`payload`] - Build request bodies from a workflow
//! - [`pipeline`] - Run the project, batch and task stages against an API

pub mod payload;
pub mod pipeline;

pub use payload::{GateIssue, gate_issues, task_request, task_requests};
pub use pipeline::{RunObserver, RunSummary, TaskOutcome, run};
