//! Legacy compatibility endpoints
//!
//! Two adapters kept for old consumers: the bare (un-enveloped) snapshot
//! body, and the redirect-based snapshot UI. They reuse the same lifecycle
//! operations as the structured API; only the response shaping lives here.

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, get, http::header, put, web};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use steersman_api::CdnRef;
use steersman_snapshot::service::lifecycle;

use crate::model::AppState;

use super::{error_response, request_context};

/// Redirect target of the legacy snapshot UI
const FLASH_AND_CLOSE: &str = "/tools/flash_and_close/";

/// Percent-encoding set for a path segment: unreserved characters stay
/// literal, everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn routes() -> Scope {
    web::scope("")
        .service(get_snapshot_bare)
        .service(write_crconfig)
}

/// Serve the committed snapshot without the response envelope, matching
/// the old non-API CRConfig-Snapshots endpoint.
#[get("/crconfig-snapshots/{cdn}/CRConfig.json")]
pub async fn get_snapshot_bare(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let cdn = path.into_inner();
    match lifecycle::current_snapshot(&state.database_connection, &cdn).await {
        Ok(raw) => HttpResponse::Ok()
            .insert_header(header::ContentType::json())
            .body(raw),
        Err(err) => error_response(&err),
    }
}

/// Create a snapshot on behalf of the legacy UI.
///
/// Emulates the old UI contract: success and failure both come back as a
/// redirect to the flash-and-close page carrying a human-readable message.
/// This should go away when the legacy UI ceases to exist.
#[put("/tools/write_crconfig/{cdn}")]
pub async fn write_crconfig(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let cdn_ref = CdnRef::by_name(path.into_inner());
    let ctx = request_context(&req, &state);
    match lifecycle::take_snapshot(&state.database_connection, &cdn_ref, &ctx).await {
        Ok(_) => flash_redirect("Successfully wrote the CRConfig.json!"),
        Err(err) => {
            tracing::error!(error = %err, "legacy snapshot create failed");
            flash_redirect(&format!("Error: {}", err.client_text()))
        }
    }
}

fn flash_redirect(message: &str) -> HttpResponse {
    let location = format!(
        "{}{}",
        FLASH_AND_CLOSE,
        utf8_percent_encode(message, PATH_SEGMENT)
    );
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
