//! Shared application state

use sea_orm::DatabaseConnection;

use super::config::Configuration;

/// State shared by every HTTP worker.
///
/// There is no cross-request mutable state here: each request binds to one
/// database transaction and the relational store is the only point of
/// concurrency control.
#[derive(Clone)]
pub struct AppState {
    pub database_connection: DatabaseConnection,
    pub configuration: Configuration,
}

impl AppState {
    pub fn new(database_connection: DatabaseConnection, configuration: Configuration) -> Self {
        Self {
            database_connection,
            configuration,
        }
    }
}
