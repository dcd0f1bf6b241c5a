//! Error types for Steersman
//!
//! This module defines:
//! - `SteersmanError`: application-specific error enum, with the
//!   client/system classification the snapshot lifecycle relies on
//! - `AppError`: wrapper for integration with web frameworks

use std::fmt::{Display, Formatter};

/// Application-specific error types.
///
/// The variants fall into two classes: client errors (the caller supplied a
/// missing or unknown identity) and system errors (build, store, or audit
/// failure). `status_code()` and `client_text()` encode that classification;
/// the full detail of a system error goes to operator logs only.
#[derive(thiserror::Error, Debug)]
pub enum SteersmanError {
    #[error("params missing CDN")]
    MissingCdn,

    #[error("no CDN found with id {0}")]
    CdnIdNotFound(i64),

    #[error("CDN '{0}' not found")]
    CdnNotFound(String),

    #[error("no snapshot found for CDN '{0}'")]
    SnapshotNotFound(String),

    #[error("resource '{0}' not found")]
    ResourceNotFound(String),

    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("making CRConfig: {0}")]
    BuildError(String),

    #[error("snapshotting CRConfig: {0}")]
    StoreError(String),

    #[error("writing change log: {0}")]
    AuditError(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl SteersmanError {
    /// HTTP status class for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            SteersmanError::MissingCdn
            | SteersmanError::CdnIdNotFound(_)
            | SteersmanError::CdnNotFound(_)
            | SteersmanError::SnapshotNotFound(_)
            | SteersmanError::ResourceNotFound(_) => 404,
            SteersmanError::IllegalArgument(_) => 400,
            SteersmanError::BuildError(_)
            | SteersmanError::StoreError(_)
            | SteersmanError::AuditError(_)
            | SteersmanError::DatabaseError(_)
            | SteersmanError::InternalError(_) => 500,
        }
    }

    /// True for errors caused by the caller rather than the system.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Text safe to return to the caller. Client errors carry their full
    /// message; system errors get a generic text, the detail stays in logs.
    pub fn client_text(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            "internal server error".to_string()
        }
    }

    /// Wrap a database driver error. This crate stays ORM-agnostic, so the
    /// conversion goes through `Display` rather than a `From` impl.
    pub fn db<E: Display>(err: E) -> Self {
        SteersmanError::DatabaseError(err.to_string())
    }
}

/// Wrapper for application errors
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }

    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}
