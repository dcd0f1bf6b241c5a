//! Snapshot storage
//!
//! Get/put of the persisted CRConfig. The stored value is treated as opaque
//! text: `get_snapshot` hands back the exact bytes that were written so the
//! transport layer can pass them through without re-serialization.

use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait};

use steersman_api::CrConfig;
use steersman_common::{SteersmanError, utils};
use steersman_persistence::entity::snapshot;

/// Fetch the current snapshot for a CDN.
///
/// Three outcomes: `Ok(Some(raw))` when a snapshot exists, `Ok(None)` when
/// the CDN has none (the caller maps this to not-found), `Err` on store
/// failure.
pub async fn get_snapshot<C: ConnectionTrait>(
    conn: &C,
    cdn_name: &str,
) -> Result<Option<String>, SteersmanError> {
    let row = snapshot::Entity::find_by_id(cdn_name)
        .one(conn)
        .await
        .map_err(|e| SteersmanError::StoreError(e.to_string()))?;
    Ok(row.map(|s| s.content))
}

/// Write a CRConfig as the CDN's current snapshot, replacing any previous
/// row wholesale.
///
/// Runs on the caller's (ambient) transaction so it commits or rolls back
/// as a unit with sibling writes, notably the change-log row.
pub async fn put_snapshot<C: ConnectionTrait>(
    conn: &C,
    crconfig: &CrConfig,
) -> Result<(), SteersmanError> {
    let content = serde_json::to_string(crconfig)
        .map_err(|e| SteersmanError::StoreError(e.to_string()))?;
    let now = utils::now_naive();

    let existing = snapshot::Entity::find_by_id(&crconfig.stats.cdn_name)
        .one(conn)
        .await
        .map_err(|e| SteersmanError::StoreError(e.to_string()))?;

    match existing {
        Some(row) => {
            let mut active: snapshot::ActiveModel = row.into();
            active.content = Set(content);
            active.last_updated = Set(now);
            active
                .update(conn)
                .await
                .map_err(|e| SteersmanError::StoreError(e.to_string()))?;
        }
        None => {
            snapshot::ActiveModel {
                cdn: Set(crconfig.stats.cdn_name.clone()),
                content: Set(content),
                last_updated: Set(now),
            }
            .insert(conn)
            .await
            .map_err(|e| SteersmanError::StoreError(e.to_string()))?;
        }
    }
    Ok(())
}
