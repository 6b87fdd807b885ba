//! Workflow definition
//!
//! Everything one run needs: which project and batch to create, which
//! images to send, and how annotators label them. The default is the
//! traffic-light workflow; any part can be overridden from a config file.

use serde::{Deserialize, Serialize};

use super::{AttributeKind, TaskType};

/// Label set of the default workflow
pub const TRAFFIC_LIGHT_LABELS: [&str; 5] = [
    "Single Light",
    "Double Light",
    "Pedestrian Light",
    "Bike Light",
    "Other",
];

const LIGHT_COLORS: [&str; 3] = ["Green", "Yellow", "Red"];

const ARROW_DIRECTIONS: [&str; 5] = ["Up", "Left", "Right", "Left U-Turn", "Right U-Turn"];

const DEFAULT_ATTACHMENTS: [&str; 3] = [
    "https://i.imgur.com/iDZcXfS.png",
    "https://cdn.vox-cdn.com/thumbor/Q7_74k0zUmVCID7lnfaxKMuSaVU=/0x0:4000x2667/1200x800/filters:focal(1680x1014:2320x1654)/cdn.vox-cdn.com/uploads/chorus_image/image/65027193/shutterstock_788608396.0.jpg",
    "https://a.cdn-hotels.com/gdcs/production152/d996/c45c6d23-25e3-46c9-9ffe-7ca8c4840e54.jpg?impolicy=fcrop&w=800&h=533&q=medium",
];

const DEFAULT_INSTRUCTION: &str = r#"<iframe src="https://docs.google.com/document/d/e/2PACX-1vR1SSLKmTo5rVKFevAFcSMBWtnQpmt6Mjs1wSuVJ1KNfuoTL3jG309rueLNj_PcgRjKxkFsHdwfNEuS/pub?embedded=true"></iframe>"#;

const DEFAULT_CALLBACK: &str = "rawlison@scaleapi.com";

/// Project to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSpec {
    /// Project name
    pub name: String,
    /// Task type shared by the project's tasks
    pub task_type: TaskType,
    /// Annotator instructions (HTML)
    pub instruction: String,
}

impl Default for ProjectSpec {
    fn default() -> Self {
        Self {
            name: "traffic_lights".to_string(),
            task_type: TaskType::ImageAnnotation,
            instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

/// Batch to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSpec {
    /// Batch name
    pub name: String,
    /// Callback destination for the batch and each of its tasks
    pub callback: String,
}

impl Default for BatchSpec {
    fn default() -> Self {
        Self {
            name: "traffic_lights_batch_1".to_string(),
            callback: DEFAULT_CALLBACK.to_string(),
        }
    }
}

/// Box geometry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySpec {
    /// Labels annotators may apply to a box
    pub labels: Vec<String>,
    /// Minimum box height in pixels
    pub min_height: u32,
    /// Minimum box width in pixels
    pub min_width: u32,
    /// Whether boxes may be rotated
    pub can_rotate: bool,
    /// Whether each box gets a label
    pub with_labels: bool,
}

impl Default for GeometrySpec {
    fn default() -> Self {
        Self {
            labels: TRAFFIC_LIGHT_LABELS.iter().map(|l| (*l).to_string()).collect(),
            min_height: 10,
            min_width: 10,
            can_rotate: true,
            with_labels: true,
        }
    }
}

/// A named conditional attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Attribute name (key in the request)
    pub name: String,
    /// Question type
    #[serde(default)]
    pub kind: AttributeKind,
    /// Prompt shown to the annotator
    pub description: String,
    /// Allowed answers
    #[serde(default)]
    pub choices: Vec<String>,
    /// Labels that must be on the box for the question to show
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when_labels: Vec<String>,
    /// Whether several choices may be selected
    #[serde(default)]
    pub allow_multiple: bool,
}

impl AttributeSpec {
    fn category(name: &str, description: &str, choices: &[&str], when_labels: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            kind: AttributeKind::Category,
            description: description.to_string(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            when_labels,
            allow_multiple: false,
        }
    }
}

/// A complete workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    /// Image URLs, one task each
    pub attachments: Vec<String>,
    /// Project to create
    pub project: ProjectSpec,
    /// Batch to create
    pub batch: BatchSpec,
    /// Geometry settings
    pub geometry: GeometrySpec,
    /// Conditional attributes, in request order
    pub attributes: Vec<AttributeSpec>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::traffic_lights()
    }
}

impl Workflow {
    /// The traffic-light workflow
    ///
    /// Lights 1 show on single and double lights, lights 2 only on double
    /// lights. Gates are taken from the label set itself.
    #[must_use]
    pub fn traffic_lights() -> Self {
        let geometry = GeometrySpec::default();
        let single_or_double = vec![geometry.labels[0].clone(), geometry.labels[1].clone()];
        let double = vec![geometry.labels[1].clone()];

        let attributes = vec![
            AttributeSpec::category(
                "Light 1",
                "What color is the light?",
                &LIGHT_COLORS,
                single_or_double.clone(),
            ),
            AttributeSpec::category(
                "Arrow 1",
                "What direction is the light indicating?",
                &ARROW_DIRECTIONS,
                single_or_double,
            ),
            AttributeSpec::category(
                "Light 2",
                "What color is the light?",
                &LIGHT_COLORS,
                double.clone(),
            ),
            AttributeSpec::category(
                "Arrow 2",
                "What direction is the light indicating?",
                &ARROW_DIRECTIONS,
                double,
            ),
        ];

        Self {
            attachments: DEFAULT_ATTACHMENTS.iter().map(|a| (*a).to_string()).collect(),
            project: ProjectSpec::default(),
            batch: BatchSpec::default(),
            geometry,
            attributes,
        }
    }
}
