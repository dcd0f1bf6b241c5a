//! Change-log writing
//!
//! One audit row per administrative change, written on the caller's
//! transaction.

use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait};

use steersman_common::{SteersmanError, utils};
use steersman_persistence::entity::change_log;

/// Insert a change-log row.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
    level: &str,
    message: &str,
    username: &str,
) -> Result<(), SteersmanError> {
    change_log::ActiveModel {
        level: Set(level.to_string()),
        message: Set(message.to_string()),
        username: Set(username.to_string()),
        last_updated: Set(utils::now_naive()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|e| SteersmanError::AuditError(e.to_string()))?;
    Ok(())
}
