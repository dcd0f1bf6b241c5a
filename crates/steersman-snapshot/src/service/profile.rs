//! Profile administration
//!
//! CRUD for profiles. Deleting a profile that associations still reference
//! fails at the FK, which surfaces as a database error; profiles are never
//! implicitly deleted.

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use steersman_api::Profile;
use steersman_common::utils;
use steersman_persistence::entity::profile;

fn to_api(m: profile::Model) -> Profile {
    Profile {
        id: m.id,
        name: m.name,
        description: m.description,
        cdn_id: m.cdn_id,
        last_updated: m.last_updated,
    }
}

/// List profiles, optionally filtered by CDN and/or exact name.
pub async fn search(
    db: &DatabaseConnection,
    cdn_id: Option<i64>,
    name: Option<&str>,
) -> anyhow::Result<Vec<Profile>> {
    let mut select = profile::Entity::find().order_by_asc(profile::Column::Name);
    if let Some(cdn_id) = cdn_id {
        select = select.filter(profile::Column::CdnId.eq(cdn_id));
    }
    if let Some(name) = name {
        select = select.filter(profile::Column::Name.eq(name));
    }
    Ok(select.all(db).await?.into_iter().map(to_api).collect())
}

/// Find a single profile by id.
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> anyhow::Result<Option<Profile>> {
    Ok(profile::Entity::find_by_id(id).one(db).await?.map(to_api))
}

/// Create a profile.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
    cdn_id: i64,
) -> anyhow::Result<Profile> {
    let row = profile::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        cdn_id: Set(cdn_id),
        last_updated: Set(utils::now_naive()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(to_api(row))
}

/// Update a profile. Returns the updated row, or None if the id is unknown.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    description: Option<&str>,
    cdn_id: i64,
) -> anyhow::Result<Option<Profile>> {
    let Some(row) = profile::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: profile::ActiveModel = row.into();
    active.name = Set(name.to_string());
    active.description = Set(description.map(str::to_string));
    active.cdn_id = Set(cdn_id);
    active.last_updated = Set(utils::now_naive());
    Ok(Some(to_api(active.update(db).await?)))
}

/// Delete a profile by id. Returns false if the id is unknown.
pub async fn delete(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let result = profile::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
