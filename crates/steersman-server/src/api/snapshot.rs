//! Structured snapshot API
//!
//! Preview, get-current-snapshot, and create-snapshot. The get path writes
//! the stored snapshot bytes through untouched so consumers see exactly
//! what was committed.

use std::time::Instant;

use actix_web::{HttpRequest, HttpResponse, Responder, get, http::header, put, web};

use steersman_api::{CdnRef, Response};
use steersman_snapshot::service::lifecycle;

use crate::{metrics, model::AppState};

use super::{error_response, request_context};

/// Build and serve the CRConfig from raw SQL data.
/// This MUST only be used for debugging or previewing, the raw
/// un-snapshotted data MUST NOT be used by any component of the CDN.
#[get("/cdns/{cdn}/snapshot/new")]
pub async fn preview(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let cdn = path.into_inner();
    let ctx = request_context(&req, &state);
    let start = Instant::now();
    match lifecycle::preview(&state.database_connection, &cdn, &ctx).await {
        Ok(crconfig) => {
            metrics::record_snapshot_preview(&cdn, start.elapsed().as_secs_f64());
            HttpResponse::Ok().json(Response::new(crconfig))
        }
        Err(err) => {
            metrics::record_snapshot_error("preview");
            error_response(&err)
        }
    }
}

/// Serve the committed snapshot, wrapped in the response envelope.
///
/// The stored JSON is spliced into the envelope as-is; no re-serialization,
/// so the snapshot bytes reach the consumer byte-for-byte.
#[get("/cdns/{cdn}/snapshot")]
pub async fn get_snapshot(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let cdn = path.into_inner();
    match lifecycle::current_snapshot(&state.database_connection, &cdn).await {
        Ok(raw) => HttpResponse::Ok()
            .insert_header(header::ContentType::json())
            .body(format!(r#"{{"response":{}}}"#, raw)),
        Err(err) => error_response(&err),
    }
}

/// Create the CRConfig and write it to the snapshot table.
///
/// The CDN may be referenced by name or numeric id; this is the only
/// operation with an id fallback.
#[put("/snapshot")]
pub async fn create_snapshot(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<CdnRef>,
) -> impl Responder {
    let ctx = request_context(&req, &state);
    let start = Instant::now();
    match lifecycle::take_snapshot(&state.database_connection, &query, &ctx).await {
        Ok(cdn) => {
            metrics::record_snapshot_create(&cdn, start.elapsed().as_secs_f64());
            // TODO change to 204 No Content in the next API version
            HttpResponse::Ok().finish()
        }
        Err(err) => {
            metrics::record_snapshot_error("create");
            error_response(&err)
        }
    }
}
