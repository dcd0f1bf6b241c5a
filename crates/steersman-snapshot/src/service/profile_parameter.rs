//! Profile/parameter association administration
//!
//! List queries take the nullable wire form as a partial filter; creates
//! take the same form and promote it to the dense binding once both
//! referenced entities are verified. Reads return dense rows (names, ids,
//! timestamp) via a join.

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use steersman_api::{ProfileParameter, ProfileParameterBinding};
use steersman_common::{SteersmanError, utils};
use steersman_persistence::entity::{parameter, profile, profile_parameter};

/// List associations matching any subset of the filter's fields.
///
/// An unset field means "not specified" and constrains nothing.
pub async fn search(
    db: &DatabaseConnection,
    filter: &ProfileParameter,
) -> anyhow::Result<Vec<ProfileParameterBinding>> {
    let mut select = profile_parameter::Entity::find()
        .select_only()
        .column(profile::Column::Name)
        .column(profile_parameter::Column::ProfileId)
        .column(parameter::Column::Name)
        .column(profile_parameter::Column::ParameterId)
        .column(profile_parameter::Column::LastUpdated)
        .join(JoinType::InnerJoin, profile_parameter::Relation::Profile.def())
        .join(
            JoinType::InnerJoin,
            profile_parameter::Relation::Parameter.def(),
        )
        .order_by_asc(profile::Column::Name)
        .order_by_asc(parameter::Column::Name);

    if let Some(profile_name) = &filter.profile {
        select = select.filter(profile::Column::Name.eq(profile_name));
    }
    if let Some(profile_id) = filter.profile_id {
        select = select.filter(profile_parameter::Column::ProfileId.eq(profile_id));
    }
    if let Some(parameter_name) = &filter.parameter {
        select = select.filter(parameter::Column::Name.eq(parameter_name));
    }
    if let Some(parameter_id) = filter.parameter_id {
        select = select.filter(profile_parameter::Column::ParameterId.eq(parameter_id));
    }

    let rows: Vec<(String, i64, String, i64, chrono::NaiveDateTime)> =
        select.into_tuple().all(db).await?;

    Ok(rows
        .into_iter()
        .map(
            |(profile, profile_id, parameter, parameter_id, last_updated)| {
                ProfileParameterBinding {
                    profile,
                    profile_id,
                    parameter,
                    parameter_id,
                    last_updated,
                }
            },
        )
        .collect())
}

/// Create an association from a nullable payload.
///
/// Both ids are required and must reference existing rows; the names in the
/// returned binding come from the database, not the payload.
pub async fn create(
    db: &DatabaseConnection,
    payload: &ProfileParameter,
) -> Result<ProfileParameterBinding, SteersmanError> {
    let profile_id = payload
        .profile_id
        .ok_or_else(|| SteersmanError::IllegalArgument("profileId is required".to_string()))?;
    let parameter_id = payload
        .parameter_id
        .ok_or_else(|| SteersmanError::IllegalArgument("parameterId is required".to_string()))?;

    let profile_row = profile::Entity::find_by_id(profile_id)
        .one(db)
        .await
        .map_err(SteersmanError::db)?
        .ok_or_else(|| SteersmanError::ResourceNotFound(format!("profile {}", profile_id)))?;
    let parameter_row = parameter::Entity::find_by_id(parameter_id)
        .one(db)
        .await
        .map_err(SteersmanError::db)?
        .ok_or_else(|| SteersmanError::ResourceNotFound(format!("parameter {}", parameter_id)))?;

    let existing = profile_parameter::Entity::find_by_id((profile_id, parameter_id))
        .one(db)
        .await
        .map_err(SteersmanError::db)?;
    if existing.is_some() {
        return Err(SteersmanError::IllegalArgument(format!(
            "profile {} already has parameter {}",
            profile_id, parameter_id
        )));
    }

    let row = profile_parameter::ActiveModel {
        profile_id: Set(profile_id),
        parameter_id: Set(parameter_id),
        last_updated: Set(utils::now_naive()),
    }
    .insert(db)
    .await
    .map_err(SteersmanError::db)?;

    Ok(ProfileParameterBinding {
        profile: profile_row.name,
        profile_id: row.profile_id,
        parameter: parameter_row.name,
        parameter_id: row.parameter_id,
        last_updated: row.last_updated,
    })
}

/// Delete an association by its composite key. Returns false if absent.
pub async fn delete(
    db: &DatabaseConnection,
    profile_id: i64,
    parameter_id: i64,
) -> anyhow::Result<bool> {
    let result = profile_parameter::Entity::delete_by_id((profile_id, parameter_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
