//! Response envelopes and request parameter models

use serde::{Deserialize, Serialize};

use steersman_common::SteersmanError;

/// Alert severity for error responses
pub const ALERT_LEVEL_ERROR: &str = "error";
/// Alert severity for success messages
pub const ALERT_LEVEL_SUCCESS: &str = "success";

/// The `{"response": ...}` success envelope
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Response<T> {
    pub response: T,
}

impl<T> Response<T> {
    pub fn new(response: T) -> Self {
        Self { response }
    }
}

/// A single user-facing message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Alert {
    pub level: String,
    pub text: String,
}

/// The `{"alerts": [...]}` error envelope
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Alerts {
    pub alerts: Vec<Alert>,
}

impl Alerts {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            alerts: vec![Alert {
                level: ALERT_LEVEL_ERROR.to_string(),
                text: text.into(),
            }],
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            alerts: vec![Alert {
                level: ALERT_LEVEL_SUCCESS.to_string(),
                text: text.into(),
            }],
        }
    }

    /// Build the error envelope for an application error, using the text
    /// safe for the caller (system-error detail stays out of the body).
    pub fn from_error(err: &SteersmanError) -> Self {
        Self::error(err.client_text())
    }
}

/// A CDN addressed by name, numeric id, or (erroneously) neither.
///
/// The snapshot-create operation accepts either form; all other operations
/// take a name only. Resolution to a canonical name happens in the identity
/// resolver, not here.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnRef {
    pub cdn: Option<String>,
    pub cdn_id: Option<i64>,
}

impl CdnRef {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            cdn: Some(name.into()),
            cdn_id: None,
        }
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            cdn: None,
            cdn_id: Some(id),
        }
    }
}
