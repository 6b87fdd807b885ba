//! Request builders
//!
//! Pure functions turning a [`Workflow`] into the request bodies the
//! annotation API expects. No I/O.

use crate::core::models::{
    AnnotationAttribute, AnnotationAttributes, AttachmentType, BatchRequest, BoxGeometry,
    Geometries, ProjectRequest, TaskRequest, Workflow,
};

/// An attribute gate naming a label the geometry does not offer
///
/// Such an attribute is accepted by the server but never shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateIssue {
    /// Attribute name
    pub attribute: String,
    /// The unknown label
    pub label: String,
}

impl std::fmt::Display for GateIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "attribute '{}' is gated on label '{}', which is not in the label set",
            self.attribute, self.label
        )
    }
}

/// Body of the project creation call
#[must_use]
pub fn project_request(workflow: &Workflow) -> ProjectRequest {
    ProjectRequest::new(
        workflow.project.name.clone(),
        workflow.project.task_type,
        workflow.project.instruction.clone(),
    )
}

/// Body of the batch creation call
#[must_use]
pub fn batch_request(workflow: &Workflow) -> BatchRequest {
    BatchRequest::new(
        workflow.batch.name.clone(),
        workflow.project.name.clone(),
        workflow.batch.callback.clone(),
    )
}

/// Conditional attributes of every task, keyed by name
#[must_use]
pub fn annotation_attributes(workflow: &Workflow) -> AnnotationAttributes {
    workflow
        .attributes
        .iter()
        .map(|spec| {
            let mut attribute = AnnotationAttribute {
                kind: spec.kind,
                description: spec.description.clone(),
                choices: spec.choices.clone(),
                conditions: None,
                allow_multiple: spec.allow_multiple,
            };
            if !spec.when_labels.is_empty() {
                attribute = attribute.when_labels(spec.when_labels.clone());
            }
            (spec.name.clone(), attribute)
        })
        .collect()
}

/// Body of the task creation call for one attachment
///
/// Every attachment gets the same shape; only `attachment` differs.
#[must_use]
pub fn task_request(workflow: &Workflow, attachment: &str) -> TaskRequest {
    let geometry = &workflow.geometry;

    TaskRequest {
        batch: workflow.batch.name.clone(),
        callback_url: workflow.batch.callback.clone(),
        attachment_type: AttachmentType::Image,
        attachment: attachment.to_string(),
        geometries: Geometries::boxes(BoxGeometry {
            objects_to_annotate: geometry.labels.clone(),
            min_height: geometry.min_height,
            min_width: geometry.min_width,
            can_rotate: geometry.can_rotate,
        }),
        with_labels: geometry.with_labels,
        annotation_attributes: annotation_attributes(workflow),
    }
}

/// Task bodies for every attachment, in order
#[must_use]
pub fn task_requests(workflow: &Workflow) -> Vec<TaskRequest> {
    workflow.attachments.iter().map(|a| task_request(workflow, a)).collect()
}

/// Attribute gates that reference labels outside the geometry's label set
#[must_use]
pub fn gate_issues(workflow: &Workflow) -> Vec<GateIssue> {
    let labels = &workflow.geometry.labels;

    workflow
        .attributes
        .iter()
        .flat_map(|spec| {
            spec.when_labels
                .iter()
                .filter(move |label| !labels.contains(label))
                .map(move |label| GateIssue {
                    attribute: spec.name.clone(),
                    label: label.clone(),
                })
        })
        .collect()
}
