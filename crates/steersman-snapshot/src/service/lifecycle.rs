//! Snapshot lifecycle controller
//!
//! Orchestrates build, commit, and serve. Each operation owns one
//! transaction and returns an explicit `Result`; the transaction is
//! committed only on the success path, so any failure rolls back every
//! partial write. No commit flag exists anywhere.

use std::time::Instant;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use steersman_api::{CdnRef, CrConfig};
use steersman_common::SteersmanError;

use crate::model::{API_CHANGE_LEVEL, RequestContext};

use super::{changelog, crconfig, resolver, store};

/// Build the live CRConfig for a CDN without touching the snapshot store.
///
/// This reads raw, un-snapshotted data and MUST NOT be treated as
/// authoritative by any CDN component. It exists for debugging and preview
/// only. Name-only addressing; there is no id fallback on this path.
pub async fn preview(
    db: &DatabaseConnection,
    cdn_name: &str,
    ctx: &RequestContext,
) -> Result<CrConfig, SteersmanError> {
    let txn = db.begin().await.map_err(SteersmanError::db)?;
    let start = Instant::now();
    let crconfig = crconfig::make(&txn, cdn_name, ctx).await?;
    txn.commit().await.map_err(SteersmanError::db)?;
    info!(cdn = cdn_name, elapsed = ?start.elapsed(), "CRConfig generated for preview");
    Ok(crconfig)
}

/// Fetch the current snapshot for a CDN as raw stored JSON.
///
/// The returned string is exactly what was persisted; callers write it
/// through without re-serialization. A CDN without a snapshot row is
/// reported as not found, never as an empty document.
pub async fn current_snapshot(
    db: &DatabaseConnection,
    cdn_name: &str,
) -> Result<String, SteersmanError> {
    let txn = db.begin().await.map_err(SteersmanError::db)?;
    let raw = store::get_snapshot(&txn, cdn_name).await?;
    txn.commit().await.map_err(SteersmanError::db)?;
    raw.ok_or_else(|| SteersmanError::CdnNotFound(cdn_name.to_string()))
}

/// Build and persist a new snapshot for the referenced CDN.
///
/// Resolve (name or id), build, persist, and write the change-log entry,
/// all inside one transaction. A failure at any stage returns before the
/// commit point, so no partial snapshot and no orphaned audit entry can
/// become visible. Returns the resolved CDN name.
pub async fn take_snapshot(
    db: &DatabaseConnection,
    cdn_ref: &CdnRef,
    ctx: &RequestContext,
) -> Result<String, SteersmanError> {
    let txn = db.begin().await.map_err(SteersmanError::db)?;

    let cdn_name = resolver::resolve(&txn, cdn_ref).await?;
    let start = Instant::now();
    let crconfig = crconfig::make(&txn, &cdn_name, ctx).await?;
    store::put_snapshot(&txn, &crconfig).await?;
    changelog::create(
        &txn,
        API_CHANGE_LEVEL,
        &format!("Snapshot of CRConfig performed for {}", cdn_name),
        &ctx.user,
    )
    .await?;

    txn.commit().await.map_err(SteersmanError::db)?;
    info!(cdn = %cdn_name, user = %ctx.user, elapsed = ?start.elapsed(), "CRConfig snapshot committed");
    Ok(cdn_name)
}
