//! Shared test utilities

pub mod db;
