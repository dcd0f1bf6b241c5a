//! Database test utilities
//!
//! Utilities for integration testing against a live MySQL or PostgreSQL
//! database. Tests using these are `#[ignore]`d by default and run with
//! `TEST_DATABASE_URL` set against a database that already carries the
//! schema from `conf/`.

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::env;

use steersman_persistence::entity::{cdn, change_log, parameter, profile, profile_parameter, snapshot};

/// Test database wrapper
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Connect using `TEST_DATABASE_URL`, or None when it is unset.
    pub async fn connect_from_env() -> Option<Self> {
        let url = env::var("TEST_DATABASE_URL").ok()?;
        let connection = Database::connect(&url)
            .await
            .expect("Failed to connect to test database");
        Some(Self { connection })
    }

    /// Remove all rows, children first so FKs hold.
    pub async fn reset(&self) {
        profile_parameter::Entity::delete_many()
            .exec(&self.connection)
            .await
            .expect("reset profile_parameter");
        profile::Entity::delete_many()
            .exec(&self.connection)
            .await
            .expect("reset profile");
        parameter::Entity::delete_many()
            .exec(&self.connection)
            .await
            .expect("reset parameter");
        snapshot::Entity::delete_many()
            .exec(&self.connection)
            .await
            .expect("reset snapshot");
        change_log::Entity::delete_many()
            .exec(&self.connection)
            .await
            .expect("reset change_log");
        cdn::Entity::delete_many()
            .exec(&self.connection)
            .await
            .expect("reset cdn");
    }

    pub async fn seed_cdn(&self, name: &str, domain_name: &str) -> cdn::Model {
        cdn::ActiveModel {
            name: Set(name.to_string()),
            domain_name: Set(domain_name.to_string()),
            dnssec_enabled: Set(false),
            last_updated: Set(chrono::Local::now().naive_local()),
            ..Default::default()
        }
        .insert(&self.connection)
        .await
        .expect("seed cdn")
    }

    pub async fn seed_profile(&self, name: &str, cdn_id: i64) -> profile::Model {
        profile::ActiveModel {
            name: Set(name.to_string()),
            description: Set(None),
            cdn_id: Set(cdn_id),
            last_updated: Set(chrono::Local::now().naive_local()),
            ..Default::default()
        }
        .insert(&self.connection)
        .await
        .expect("seed profile")
    }

    pub async fn seed_parameter(&self, name: &str, value: &str) -> parameter::Model {
        parameter::ActiveModel {
            name: Set(name.to_string()),
            value: Set(value.to_string()),
            last_updated: Set(chrono::Local::now().naive_local()),
            ..Default::default()
        }
        .insert(&self.connection)
        .await
        .expect("seed parameter")
    }

    pub async fn seed_association(&self, profile_id: i64, parameter_id: i64) {
        profile_parameter::ActiveModel {
            profile_id: Set(profile_id),
            parameter_id: Set(parameter_id),
            last_updated: Set(chrono::Local::now().naive_local()),
        }
        .insert(&self.connection)
        .await
        .expect("seed association");
    }

    /// All change-log messages for a user, oldest first.
    pub async fn change_log_messages(&self, username: &str) -> Vec<String> {
        change_log::Entity::find()
            .filter(change_log::Column::Username.eq(username))
            .order_by_asc(change_log::Column::Id)
            .all(&self.connection)
            .await
            .expect("read change_log")
            .into_iter()
            .map(|row| row.message)
            .collect()
    }

    /// The raw snapshot row for a CDN, if any.
    pub async fn snapshot_row(&self, cdn_name: &str) -> Option<snapshot::Model> {
        snapshot::Entity::find_by_id(cdn_name)
            .one(&self.connection)
            .await
            .expect("read snapshot")
    }
}
