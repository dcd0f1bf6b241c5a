//! Steersman Common - shared error types and utilities
//!
//! This crate provides:
//! - `SteersmanError`: the application error enum
//! - `AppError`: wrapper for integration with web frameworks
//! - Shared time helpers

pub mod error;
pub mod utils;

pub use error::*;
