//! Port traits (interfaces) for external dependencies
//!
//! The workflow services depend only on these traits. The HTTP
//! implementation lives in the `adapters` module; tests substitute an
//! in-memory one.

mod annotation_api;

pub use annotation_api::AnnotationApi;
