//! Change log entity for audit logging
//!
//! One row per administrative change; snapshot creates write here in the
//! same transaction as the snapshot row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "change_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Change level: APICHANGE for snapshot events
    pub level: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// User who performed the change
    pub username: String,
    pub last_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
