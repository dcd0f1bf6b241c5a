//! Profile administration endpoints

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use steersman_api::{Alerts, Response, validation};
use steersman_snapshot::service::profile;

use crate::model::AppState;

use super::internal_error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParam {
    pub cdn_id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub name: String,
    pub description: Option<String>,
    pub cdn_id: i64,
}

pub fn routes() -> Scope {
    web::scope("/profiles")
        .service(list)
        .service(get_by_id)
        .service(create)
        .service(update)
        .service(remove)
}

#[get("")]
pub async fn list(state: web::Data<AppState>, params: web::Query<ListParam>) -> impl Responder {
    match profile::search(
        &state.database_connection,
        params.cdn_id,
        params.name.as_deref(),
    )
    .await
    {
        Ok(profiles) => HttpResponse::Ok().json(Response::new(profiles)),
        Err(err) => internal_error(&err),
    }
}

#[get("/{id}")]
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match profile::find_by_id(&state.database_connection, id).await {
        Ok(Some(p)) => HttpResponse::Ok().json(Response::new(p)),
        Ok(None) => {
            HttpResponse::NotFound().json(Alerts::error(format!("no profile with id {}", id)))
        }
        Err(err) => internal_error(&err),
    }
}

#[post("")]
pub async fn create(
    state: web::Data<AppState>,
    payload: web::Json<ProfilePayload>,
) -> impl Responder {
    if validation::validate_name(&payload.name).is_err() {
        return HttpResponse::BadRequest().json(Alerts::error("invalid profile name"));
    }
    match profile::create(
        &state.database_connection,
        &payload.name,
        payload.description.as_deref(),
        payload.cdn_id,
    )
    .await
    {
        Ok(p) => HttpResponse::Ok().json(Response::new(p)),
        Err(err) => internal_error(&err),
    }
}

#[put("/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<ProfilePayload>,
) -> impl Responder {
    if validation::validate_name(&payload.name).is_err() {
        return HttpResponse::BadRequest().json(Alerts::error("invalid profile name"));
    }
    let id = path.into_inner();
    match profile::update(
        &state.database_connection,
        id,
        &payload.name,
        payload.description.as_deref(),
        payload.cdn_id,
    )
    .await
    {
        Ok(Some(p)) => HttpResponse::Ok().json(Response::new(p)),
        Ok(None) => {
            HttpResponse::NotFound().json(Alerts::error(format!("no profile with id {}", id)))
        }
        Err(err) => internal_error(&err),
    }
}

#[delete("/{id}")]
pub async fn remove(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match profile::delete(&state.database_connection, id).await {
        Ok(true) => HttpResponse::Ok().json(Alerts::success("profile was deleted")),
        Ok(false) => {
            HttpResponse::NotFound().json(Alerts::error(format!("no profile with id {}", id)))
        }
        Err(err) => internal_error(&err),
    }
}
