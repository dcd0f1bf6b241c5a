//! Snapshot service layer
//!
//! This module provides the database-backed services of the snapshot
//! subsystem:
//! - CDN identity resolution
//! - CRConfig generation
//! - Snapshot storage
//! - Change-log writing
//! - The lifecycle controller tying them together
//! - Profile / parameter / association administration

pub mod changelog;
pub mod crconfig;
pub mod lifecycle;
pub mod parameter;
pub mod profile;
pub mod profile_parameter;
pub mod resolver;
pub mod store;

pub use lifecycle::*;
