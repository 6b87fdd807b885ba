//! Conditional annotation attributes
//!
//! An attribute is a follow-up question asked about each drawn geometry.
//! Its label condition decides which geometries it appears on: the
//! question only shows when the geometry carries one of the gating labels.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Attribute question type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Pick from a fixed set of choices
    #[default]
    Category,
    /// Free-form text answer
    Text,
    /// Numeric answer
    Number,
}

/// Labels a geometry must carry for an attribute to show
///
/// A single label goes over the wire as a bare string, several as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelGate {
    /// Exactly one gating label
    One(String),
    /// Any of several gating labels
    Any(Vec<String>),
}

impl LabelGate {
    /// Build a gate from a label list, collapsing a singleton to [`LabelGate::One`]
    #[must_use]
    pub fn from_labels(mut labels: Vec<String>) -> Self {
        if labels.len() == 1 {
            Self::One(labels.remove(0))
        } else {
            Self::Any(labels)
        }
    }

    /// All gating labels
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match self {
            Self::One(label) => std::slice::from_ref(label),
            Self::Any(labels) => labels,
        }
    }
}

/// `{"label": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCondition {
    /// Gating label(s)
    pub label: LabelGate,
}

/// `{"label_condition": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConditions {
    /// Label condition
    pub label_condition: LabelCondition,
}

/// A single attribute question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationAttribute {
    /// Question type
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Prompt shown to the annotator
    pub description: String,
    /// Allowed answers
    pub choices: Vec<String>,
    /// When the question shows (always, if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<AttributeConditions>,
    /// Whether several choices may be selected
    pub allow_multiple: bool,
}

impl AnnotationAttribute {
    /// Single-select category question
    #[must_use]
    pub fn category(description: impl Into<String>, choices: &[&str]) -> Self {
        Self {
            kind: AttributeKind::Category,
            description: description.into(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            conditions: None,
            allow_multiple: false,
        }
    }

    /// Show the question only on geometries carrying one of `labels`
    #[must_use]
    pub fn when_labels(mut self, labels: Vec<String>) -> Self {
        self.conditions = Some(AttributeConditions {
            label_condition: LabelCondition {
                label: LabelGate::from_labels(labels),
            },
        });
        self
    }

    /// Gating labels, empty when unconditional
    #[must_use]
    pub fn gating_labels(&self) -> &[String] {
        match &self.conditions {
            Some(conditions) => conditions.label_condition.label.labels(),
            None => &[],
        }
    }
}

/// Ordered set of named attributes, sent as a JSON object
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationAttributes(Vec<(String, AnnotationAttribute)>);

impl AnnotationAttributes {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add or replace the attribute called `name`
    pub fn insert(&mut self, name: impl Into<String>, attribute: AnnotationAttribute) {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = attribute;
        } else {
            self.0.push((name, attribute));
        }
    }

    /// Look up an attribute by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AnnotationAttribute> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationAttribute)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }
}

impl FromIterator<(String, AnnotationAttribute)> for AnnotationAttributes {
    fn from_iter<I: IntoIterator<Item = (String, AnnotationAttribute)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, attribute) in iter {
            attributes.insert(name, attribute);
        }
        attributes
    }
}

impl Serialize for AnnotationAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, attribute) in &self.0 {
            map.serialize_entry(name, attribute)?;
        }
        map.end()
    }
}
