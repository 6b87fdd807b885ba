//! Geometry specifications
//!
//! Which shapes annotators may draw and with which labels.

use serde::{Deserialize, Serialize};

/// Bounding-box geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Labels an annotator may put on a box
    pub objects_to_annotate: Vec<String>,
    /// Minimum box height in pixels
    pub min_height: u32,
    /// Minimum box width in pixels
    pub min_width: u32,
    /// Whether boxes may be rotated
    pub can_rotate: bool,
}

/// Geometry types enabled on a task, keyed by shape name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometries {
    /// Boxes
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoxGeometry>,
}

impl Geometries {
    /// Only boxes are enabled
    #[must_use]
    pub const fn boxes(geometry: BoxGeometry) -> Self {
        Self {
            bounding_box: Some(geometry),
        }
    }
}
