//! Steersman Persistence - database entities
//!
//! SeaORM entity definitions for the relational state the snapshot
//! subsystem reads and writes: CDNs, profiles, parameters, their
//! association, the snapshot table, and the change log.

pub mod entity;
