//! CRConfig generation
//!
//! Builds the complete configuration document for one CDN from current
//! relational state. Deterministic for identical state (sorted maps), never
//! writes, and fails with a descriptive error rather than a partial
//! document.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};

use steersman_api::{CrConfig, CrConfigProfile, CrConfigStats};
use steersman_common::{SteersmanError, utils};
use steersman_persistence::entity::{cdn, parameter, profile, profile_parameter};

use crate::model::RequestContext;

/// Generate the CRConfig for `cdn_name` from live relational state.
pub async fn make<C: ConnectionTrait>(
    conn: &C,
    cdn_name: &str,
    ctx: &RequestContext,
) -> Result<CrConfig, SteersmanError> {
    let cdn_row = cdn::Entity::find()
        .filter(cdn::Column::Name.eq(cdn_name))
        .one(conn)
        .await
        .map_err(SteersmanError::db)?
        .ok_or_else(|| {
            SteersmanError::BuildError(format!("no CDN with name '{}'", cdn_name))
        })?;

    let mut crconfig = CrConfig {
        stats: CrConfigStats {
            cdn_name: cdn_row.name.clone(),
            date: utils::epoch_seconds(),
            tm_user: ctx.user.clone(),
            tm_host: ctx.host.clone(),
            tm_path: ctx.path.clone(),
            tm_version: ctx.version.clone(),
        },
        ..Default::default()
    };

    crconfig.config.insert(
        "domain_name".to_string(),
        serde_json::Value::String(cdn_row.domain_name.clone()),
    );
    crconfig.config.insert(
        "dnssec.enabled".to_string(),
        serde_json::Value::String(cdn_row.dnssec_enabled.to_string()),
    );

    // Every profile of the CDN appears in the document, with or without
    // parameters.
    let profiles = profile::Entity::find()
        .filter(profile::Column::CdnId.eq(cdn_row.id))
        .order_by_asc(profile::Column::Name)
        .all(conn)
        .await
        .map_err(SteersmanError::db)?;
    for p in &profiles {
        crconfig
            .profiles
            .insert(p.name.clone(), CrConfigProfile::default());
    }

    let rows: Vec<(String, String, String)> = profile_parameter::Entity::find()
        .select_only()
        .column(profile::Column::Name)
        .column(parameter::Column::Name)
        .column(parameter::Column::Value)
        .join(JoinType::InnerJoin, profile_parameter::Relation::Profile.def())
        .join(
            JoinType::InnerJoin,
            profile_parameter::Relation::Parameter.def(),
        )
        .filter(profile::Column::CdnId.eq(cdn_row.id))
        .order_by_asc(profile::Column::Name)
        .order_by_asc(parameter::Column::Name)
        .into_tuple()
        .all(conn)
        .await
        .map_err(SteersmanError::db)?;

    for (profile_name, param_name, param_value) in rows {
        crconfig.config.insert(
            param_name.clone(),
            serde_json::Value::String(param_value.clone()),
        );
        crconfig
            .profiles
            .entry(profile_name)
            .or_default()
            .parameters
            .insert(param_name, param_value);
    }

    Ok(crconfig)
}
