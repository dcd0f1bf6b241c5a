//! Snapshot entity
//!
//! At most one current snapshot per CDN: the CDN name is the primary key
//! and a new snapshot replaces the row wholesale. Stored content is the
//! serialized CRConfig, never mutated in place.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "snapshot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cdn: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub last_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
