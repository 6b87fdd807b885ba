//! Core domain logic for labelrig
//!
//! Pure data and orchestration. The annotation service is reached only
//! through the [`ports::AnnotationApi`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Request and response types, the workflow definition
//! - `services/` - Payload building and the three-stage run
//! - `ports/` - Trait for the remote annotation service

pub mod models;
pub mod ports;
pub mod services;
