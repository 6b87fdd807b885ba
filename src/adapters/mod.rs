//! Adapter implementations for port traits
//!
//! - `scale/` - Blocking HTTP client for the Scale annotation API

pub mod scale;

pub use scale::{DEFAULT_BASE_URL, ScaleClient, ScaleClientBuilder};
