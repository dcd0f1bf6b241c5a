//! CDN identity resolution
//!
//! Maps a CDN reference supplied as a name or a numeric id to the canonical
//! name. A supplied name passes through unchecked; existence is validated
//! downstream by the builder and store.

use sea_orm::{ConnectionTrait, EntityTrait};

use steersman_api::CdnRef;
use steersman_common::SteersmanError;
use steersman_persistence::entity::cdn;

/// Resolve a CDN reference to its canonical name.
///
/// Read-only; runs on the caller's connection or transaction.
pub async fn resolve<C: ConnectionTrait>(
    conn: &C,
    cdn_ref: &CdnRef,
) -> Result<String, SteersmanError> {
    if let Some(name) = &cdn_ref.cdn {
        return Ok(name.clone());
    }
    let Some(id) = cdn_ref.cdn_id else {
        return Err(SteersmanError::MissingCdn);
    };
    let row = cdn::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(SteersmanError::db)?;
    match row {
        Some(cdn) => Ok(cdn.name),
        None => Err(SteersmanError::CdnIdNotFound(id)),
    }
}
