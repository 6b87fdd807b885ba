//! Task types understood by the annotation API
//!
//! The wire name doubles as the path segment of the task creation endpoint
//! (`POST /task/{type}`).

use serde::{Deserialize, Serialize};

/// Annotation task type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Boxes, polygons, lines and points drawn over a single image
    #[default]
    ImageAnnotation,
    /// Per-frame annotation of a video
    VideoAnnotation,
    /// Text spans and categories over a document
    TextCollection,
    /// Free-form categorization of an attachment
    Categorization,
}

impl TaskType {
    /// Wire name of the task type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImageAnnotation => "imageannotation",
            Self::VideoAnnotation => "videoannotation",
            Self::TextCollection => "textcollection",
            Self::Categorization => "categorization",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
