//! Utility functions for Steersman
//!
//! Common helper functions used across the codebase.

use chrono::Utc;

/// Current time as Unix epoch seconds, the generation-date format CRConfig
/// stats carry.
///
/// # Examples
///
/// ```
/// use steersman_common::utils::epoch_seconds;
///
/// assert!(epoch_seconds() > 1_700_000_000);
/// ```
pub fn epoch_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Current time as a naive local timestamp for `last_updated` columns.
pub fn now_naive() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
