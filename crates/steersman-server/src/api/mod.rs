//! HTTP API: presentation adapters over the snapshot services
//!
//! `snapshot` is the structured API, `legacy` the backward-compatible
//! shapes (bare snapshot body, redirect-based snapshot UI). Both adapt the
//! same lifecycle operations; only response shaping differs.

pub mod legacy;
pub mod parameter;
pub mod profile;
pub mod profile_parameter;
pub mod snapshot;

use actix_web::{HttpRequest, HttpResponse, Scope, http::StatusCode, web};
use tracing::error;

use steersman_api::Alerts;
use steersman_common::SteersmanError;
use steersman_snapshot::RequestContext;

use crate::model::AppState;

/// Create the structured API routes.
///
/// Everything under `/api/v1` registers inside this single scope; actix-web
/// does not fall through to a later scope once a prefix has matched.
pub fn routes() -> Scope {
    web::scope("/api/v1")
        .service(profile_parameter::routes())
        .service(profile::routes())
        .service(parameter::routes())
        .service(snapshot::preview)
        .service(snapshot::get_snapshot)
        .service(snapshot::create_snapshot)
}

/// Header carrying the authenticated user, set by the auth layer in front
/// of this service.
pub const REMOTE_USER_HEADER: &str = "x-steersman-user";

/// Build the request context recorded in a CRConfig's stats block.
pub fn request_context(req: &HttpRequest, state: &AppState) -> RequestContext {
    let user = req
        .headers()
        .get(REMOTE_USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("anonymous");
    RequestContext::new(
        user,
        req.connection_info().host(),
        req.path(),
        state.configuration.version(),
    )
}

/// Map an application error to its structured HTTP response.
///
/// Client errors carry their message in the alerts body; system errors get
/// a generic body and the detail goes to the operator log.
pub fn error_response(err: &SteersmanError) -> HttpResponse {
    if !err.is_client_error() {
        error!(error = %err, "request failed");
    }
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(Alerts::from_error(err))
}

/// Map a service-plumbing error to a 500 with a generic body.
pub fn internal_error(err: &anyhow::Error) -> HttpResponse {
    error!(error = %err, "request failed");
    HttpResponse::InternalServerError().json(Alerts::error("internal server error"))
}
