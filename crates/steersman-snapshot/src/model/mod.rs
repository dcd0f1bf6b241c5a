//! Domain models for the snapshot services

use serde::{Deserialize, Serialize};

/// Change-log level for snapshot events
pub const API_CHANGE_LEVEL: &str = "APICHANGE";

/// The request context a CRConfig generation records in its stats block.
///
/// Captured once by the transport layer and threaded through the lifecycle
/// so the builder never touches the HTTP request itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Authenticated user performing the operation
    pub user: String,
    /// Host the request was addressed to
    pub host: String,
    /// Request path, recorded as tm_path
    pub path: String,
    /// Control-plane version string
    pub version: String,
}

impl RequestContext {
    pub fn new(
        user: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            path: path.into(),
            version: version.into(),
        }
    }
}
