//! Profile entity
//!
//! A named configuration grouping attached to one CDN. The FK from
//! profile_parameter keeps a profile alive while associations reference it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cdn_id: i64,
    pub last_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cdn::Entity",
        from = "Column::CdnId",
        to = "super::cdn::Column::Id"
    )]
    Cdn,
    #[sea_orm(has_many = "super::profile_parameter::Entity")]
    ProfileParameter,
}

impl Related<super::cdn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cdn.def()
    }
}

impl Related<super::profile_parameter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileParameter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
