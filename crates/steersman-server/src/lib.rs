//! Steersman server library
//!
//! HTTP transport, configuration, logging, and metrics for the snapshot
//! control plane. The domain logic lives in `steersman-snapshot`; this
//! crate adapts it to actix-web.

pub mod api;
pub mod metrics;
pub mod model;
pub mod startup;
