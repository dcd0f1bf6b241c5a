//! Parameter administration

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use steersman_api::Parameter;
use steersman_common::utils;
use steersman_persistence::entity::parameter;

fn to_api(m: parameter::Model) -> Parameter {
    Parameter {
        id: m.id,
        name: m.name,
        value: m.value,
        last_updated: m.last_updated,
    }
}

/// List parameters, optionally filtered by exact name.
pub async fn search(db: &DatabaseConnection, name: Option<&str>) -> anyhow::Result<Vec<Parameter>> {
    let mut select = parameter::Entity::find()
        .order_by_asc(parameter::Column::Name)
        .order_by_asc(parameter::Column::Id);
    if let Some(name) = name {
        select = select.filter(parameter::Column::Name.eq(name));
    }
    Ok(select.all(db).await?.into_iter().map(to_api).collect())
}

/// Find a single parameter by id.
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> anyhow::Result<Option<Parameter>> {
    Ok(parameter::Entity::find_by_id(id).one(db).await?.map(to_api))
}

/// Create a parameter.
pub async fn create(db: &DatabaseConnection, name: &str, value: &str) -> anyhow::Result<Parameter> {
    let row = parameter::ActiveModel {
        name: Set(name.to_string()),
        value: Set(value.to_string()),
        last_updated: Set(utils::now_naive()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(to_api(row))
}

/// Update a parameter. Returns the updated row, or None if the id is unknown.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    value: &str,
) -> anyhow::Result<Option<Parameter>> {
    let Some(row) = parameter::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: parameter::ActiveModel = row.into();
    active.name = Set(name.to_string());
    active.value = Set(value.to_string());
    active.last_updated = Set(utils::now_naive());
    Ok(Some(to_api(active.update(db).await?)))
}

/// Delete a parameter by id. Returns false if the id is unknown.
pub async fn delete(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let result = parameter::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
