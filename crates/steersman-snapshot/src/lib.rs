//! Steersman Snapshot - the snapshot lifecycle and its collaborators
//!
//! This crate provides:
//! - The CDN identity resolver (name-or-id to canonical name)
//! - The CRConfig builder
//! - The snapshot store (get/put of the persisted CRConfig)
//! - The snapshot lifecycle controller (preview, get, create)
//! - Administrative services for profiles, parameters, and associations

pub mod model;
pub mod service;

// Re-export commonly used types
pub use model::*;
