//! Parameter entity
//!
//! A named configuration key with a value.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "parameter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub last_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::profile_parameter::Entity")]
    ProfileParameter,
}

impl Related<super::profile_parameter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileParameter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
