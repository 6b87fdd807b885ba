//! Domain models for labelrig
//!
//! Request bodies sent to the annotation API and the records it returns.
//!
//! - [`ProjectRequest`] / [`Project`] - The named container of all work
//! - [`BatchRequest`] / [`Batch`] - A group of tasks sharing a callback
//! - [`TaskRequest`] / [`Task`] - One image to annotate
//! - [`AnnotationAttribute`] - A conditional follow-up question
//! - [`Workflow`] - Everything one run creates and submits

mod attribute;
mod batch;
mod geometry;
mod project;
mod task;
mod task_type;
mod workflow;

pub use attribute::{
    AnnotationAttribute, AnnotationAttributes, AttributeConditions, AttributeKind, LabelCondition,
    LabelGate,
};
pub use batch::{Batch, BatchRequest};
pub use geometry::{BoxGeometry, Geometries};
pub use project::{Project, ProjectParams, ProjectRequest};
pub use task::{AttachmentType, Task, TaskRequest};
pub use task_type::TaskType;
pub use workflow::{
    AttributeSpec, BatchSpec, GeometrySpec, ProjectSpec, TRAFFIC_LIGHT_LABELS, Workflow,
};
