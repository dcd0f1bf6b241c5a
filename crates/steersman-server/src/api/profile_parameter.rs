//! Profile/parameter association endpoints
//!
//! Filters and payloads use the nullable association form; responses carry
//! the dense binding.

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, web};

use steersman_api::{Alerts, ProfileParameter, Response};
use steersman_snapshot::service::profile_parameter;

use crate::model::AppState;

use super::{error_response, internal_error};

pub fn routes() -> Scope {
    web::scope("/profileparameters")
        .service(list)
        .service(create)
        .service(remove)
}

#[get("")]
pub async fn list(
    state: web::Data<AppState>,
    filter: web::Query<ProfileParameter>,
) -> impl Responder {
    match profile_parameter::search(&state.database_connection, &filter).await {
        Ok(bindings) => HttpResponse::Ok().json(Response::new(bindings)),
        Err(err) => internal_error(&err),
    }
}

#[post("")]
pub async fn create(
    state: web::Data<AppState>,
    payload: web::Json<ProfileParameter>,
) -> impl Responder {
    match profile_parameter::create(&state.database_connection, &payload).await {
        Ok(binding) => HttpResponse::Ok().json(Response::new(binding)),
        Err(err) => error_response(&err),
    }
}

#[delete("/{profile_id}/{parameter_id}")]
pub async fn remove(state: web::Data<AppState>, path: web::Path<(i64, i64)>) -> impl Responder {
    let (profile_id, parameter_id) = path.into_inner();
    match profile_parameter::delete(&state.database_connection, profile_id, parameter_id).await {
        Ok(true) => HttpResponse::Ok().json(Alerts::success("profile parameter was deleted")),
        Ok(false) => HttpResponse::NotFound().json(Alerts::error(format!(
            "no association of parameter {} with profile {}",
            parameter_id, profile_id
        ))),
        Err(err) => internal_error(&err),
    }
}
