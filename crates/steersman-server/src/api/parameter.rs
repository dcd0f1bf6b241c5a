//! Parameter administration endpoints

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use steersman_api::{Alerts, Response, validation};
use steersman_snapshot::service::parameter;

use crate::model::AppState;

use super::internal_error;

#[derive(Debug, Deserialize)]
pub struct ListParam {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParameterPayload {
    pub name: String,
    pub value: String,
}

pub fn routes() -> Scope {
    web::scope("/parameters")
        .service(list)
        .service(get_by_id)
        .service(create)
        .service(update)
        .service(remove)
}

fn validate(payload: &ParameterPayload) -> Result<(), HttpResponse> {
    if validation::validate_name(&payload.name).is_err() {
        return Err(HttpResponse::BadRequest().json(Alerts::error("invalid parameter name")));
    }
    if validation::validate_parameter_value(&payload.value).is_err() {
        return Err(HttpResponse::BadRequest().json(Alerts::error("invalid parameter value")));
    }
    Ok(())
}

#[get("")]
pub async fn list(state: web::Data<AppState>, params: web::Query<ListParam>) -> impl Responder {
    match parameter::search(&state.database_connection, params.name.as_deref()).await {
        Ok(parameters) => HttpResponse::Ok().json(Response::new(parameters)),
        Err(err) => internal_error(&err),
    }
}

#[get("/{id}")]
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match parameter::find_by_id(&state.database_connection, id).await {
        Ok(Some(p)) => HttpResponse::Ok().json(Response::new(p)),
        Ok(None) => {
            HttpResponse::NotFound().json(Alerts::error(format!("no parameter with id {}", id)))
        }
        Err(err) => internal_error(&err),
    }
}

#[post("")]
pub async fn create(
    state: web::Data<AppState>,
    payload: web::Json<ParameterPayload>,
) -> impl Responder {
    if let Err(resp) = validate(&payload) {
        return resp;
    }
    match parameter::create(&state.database_connection, &payload.name, &payload.value).await {
        Ok(p) => HttpResponse::Ok().json(Response::new(p)),
        Err(err) => internal_error(&err),
    }
}

#[put("/{id}")]
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<ParameterPayload>,
) -> impl Responder {
    if let Err(resp) = validate(&payload) {
        return resp;
    }
    let id = path.into_inner();
    match parameter::update(
        &state.database_connection,
        id,
        &payload.name,
        &payload.value,
    )
    .await
    {
        Ok(Some(p)) => HttpResponse::Ok().json(Response::new(p)),
        Ok(None) => {
            HttpResponse::NotFound().json(Alerts::error(format!("no parameter with id {}", id)))
        }
        Err(err) => internal_error(&err),
    }
}

#[delete("/{id}")]
pub async fn remove(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match parameter::delete(&state.database_connection, id).await {
        Ok(true) => HttpResponse::Ok().json(Alerts::success("parameter was deleted")),
        Ok(false) => {
            HttpResponse::NotFound().json(Alerts::error(format!("no parameter with id {}", id)))
        }
        Err(err) => internal_error(&err),
    }
}
