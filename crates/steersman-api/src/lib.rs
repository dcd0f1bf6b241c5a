//! Steersman API - wire models for the snapshot control plane
//!
//! This crate provides:
//! - Response envelopes (`Response`, `Alerts`)
//! - The entity model: profiles, parameters, and their association
//! - The CRConfig document model
//! - Input validation helpers

pub mod crconfig;
pub mod entity;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use crconfig::*;
pub use entity::*;
pub use model::*;
