//! Tests for task payload building
//!
//! Every default attachment gets the same box geometry and the same four
//! conditional attributes.

use labelrig::core::models::{LabelGate, TRAFFIC_LIGHT_LABELS, Workflow};
use labelrig::core::services::{gate_issues, task_requests};
use serde_json::json;

use crate::common::fixtures::WorkflowBuilder;

#[test]
fn test_one_payload_per_default_attachment() {
    let workflow = Workflow::traffic_lights();
    let requests = task_requests(&workflow);

    assert_eq!(requests.len(), 3);
    for (request, attachment) in requests.iter().zip(&workflow.attachments) {
        assert_eq!(&request.attachment, attachment);
    }
}

#[test]
fn test_every_payload_has_five_labels_and_four_attributes() {
    let workflow = Workflow::traffic_lights();

    for request in task_requests(&workflow) {
        let geometry = request.geometries.bounding_box.as_ref().unwrap();
        assert_eq!(geometry.objects_to_annotate, TRAFFIC_LIGHT_LABELS);
        assert_eq!(request.annotation_attributes.len(), 4);

        let names: Vec<&str> = request.annotation_attributes.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Light 1", "Arrow 1", "Light 2", "Arrow 2"]);
    }
}

#[test]
fn test_gates_match_documented_labels() {
    let workflow = Workflow::traffic_lights();
    let request = &task_requests(&workflow)[0];
    let attrs = &request.annotation_attributes;

    let gate = |name: &str| {
        attrs.get(name).unwrap().conditions.as_ref().unwrap().label_condition.label.clone()
    };

    let single_or_double = LabelGate::Any(vec!["Single Light".into(), "Double Light".into()]);
    assert_eq!(gate("Light 1"), single_or_double);
    assert_eq!(gate("Arrow 1"), single_or_double);
    assert_eq!(gate("Light 2"), LabelGate::One("Double Light".into()));
    assert_eq!(gate("Arrow 2"), LabelGate::One("Double Light".into()));
}

#[test]
fn test_gating_labels_come_from_label_set() {
    let workflow = Workflow::traffic_lights();
    let request = &task_requests(&workflow)[0];
    let labels = &request.geometries.bounding_box.as_ref().unwrap().objects_to_annotate;

    for (_, attr) in request.annotation_attributes.iter() {
        for label in attr.gating_labels() {
            assert!(labels.contains(label), "{label} not in label set");
        }
    }
}

#[test]
fn test_wire_format_of_attributes() {
    let workflow = Workflow::traffic_lights();
    let json = serde_json::to_value(&task_requests(&workflow)[0]).unwrap();

    assert_eq!(
        json["annotation_attributes"]["Arrow 2"],
        json!({
            "type": "category",
            "description": "What direction is the light indicating?",
            "choices": ["Up", "Left", "Right", "Left U-Turn", "Right U-Turn"],
            "conditions": { "label_condition": { "label": "Double Light" } },
            "allow_multiple": false
        })
    );
    assert_eq!(
        json["annotation_attributes"]["Light 1"]["conditions"]["label_condition"]["label"],
        json!(["Single Light", "Double Light"])
    );
}

#[test]
fn test_empty_attachment_list_builds_nothing() {
    let workflow = WorkflowBuilder::new().attachments(&[]).build();
    assert!(task_requests(&workflow).is_empty());
}

#[test]
fn test_gate_issues_list_unknown_labels() {
    let workflow = WorkflowBuilder::new()
        .attribute("Flashing", &["Double Light", "Tram Light"])
        .build();

    let issues = gate_issues(&workflow);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].attribute, "Flashing");
    assert_eq!(issues[0].label, "Tram Light");
    assert!(issues[0].to_string().contains("not in the label set"));
}
