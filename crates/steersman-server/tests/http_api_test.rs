//! HTTP-layer tests for the snapshot and administrative endpoints
//!
//! Exercise the presentation adapters end to end through the same route
//! composition the server registers: envelope fidelity, status mapping,
//! route dispatch, and the legacy redirect contract.

mod common;

use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::{StatusCode, header},
    test, web,
};

use steersman_api::CdnRef;
use steersman_server::{
    api,
    model::{AppState, Configuration},
};
use steersman_snapshot::RequestContext;
use steersman_snapshot::service::lifecycle;

use common::db::TestDatabase;

async fn app_for(
    connection: sea_orm::DatabaseConnection,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let state = AppState::new(connection, Configuration::default());
    // Same service set and order as startup::http::server
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api::routes())
            .service(api::legacy::routes()),
    )
    .await
}

async fn test_app(
    db: &TestDatabase,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    app_for(db.connection.clone()).await
}

fn test_ctx() -> RequestContext {
    RequestContext::new("tester", "ops.example.net", "/api/v1/snapshot", "1.0")
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn enveloped_and_bare_snapshot_bodies_carry_identical_bytes() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;
    let cdn = db.seed_cdn("cdn1", "cdn1.example.net").await;
    let profile = db.seed_profile("EDGE1", cdn.id).await;
    let param = db.seed_parameter("weight", "0.5").await;
    db.seed_association(profile.id, param.id).await;
    lifecycle::take_snapshot(&db.connection, &CdnRef::by_name("cdn1"), &test_ctx())
        .await
        .unwrap();

    let app = test_app(&db).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/cdns/cdn1/snapshot")
        .to_request();
    let enveloped = test::call_and_read_body(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/crconfig-snapshots/cdn1/CRConfig.json")
        .to_request();
    let bare = test::call_and_read_body(&app, req).await;

    // The envelope is spliced around the exact stored bytes
    let expected = format!(r#"{{"response":{}}}"#, String::from_utf8_lossy(&bare));
    assert_eq!(String::from_utf8_lossy(&enveloped), expected);

    let row = db.snapshot_row("cdn1").await.unwrap();
    assert_eq!(String::from_utf8_lossy(&bare), row.content);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn create_snapshot_returns_success_with_empty_body() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;
    db.seed_cdn("cdn1", "cdn1.example.net").await;

    let app = test_app(&db).await;
    let req = test::TestRequest::put()
        .uri("/api/v1/snapshot?cdn=cdn1")
        .insert_header((api::REMOTE_USER_HEADER, "tester"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    assert_eq!(
        db.change_log_messages("tester").await,
        vec!["Snapshot of CRConfig performed for cdn1".to_string()]
    );
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn create_snapshot_without_identity_is_not_found() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;

    let app = test_app(&db).await;
    let req = test::TestRequest::put().uri("/api/v1/snapshot").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["alerts"][0]["text"], "params missing CDN");
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unknown_snapshot_is_not_found_not_empty_document() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;
    db.seed_cdn("cdn1", "cdn1.example.net").await;

    let app = test_app(&db).await;
    let req = test::TestRequest::get()
        .uri("/api/v1/cdns/cdn1/snapshot")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn preview_wraps_the_live_document() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;
    db.seed_cdn("cdn1", "cdn1.example.net").await;

    let app = test_app(&db).await;
    let req = test::TestRequest::get()
        .uri("/api/v1/cdns/cdn1/snapshot/new")
        .insert_header((api::REMOTE_USER_HEADER, "tester"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["response"]["stats"]["CDN_name"], "cdn1");
    assert_eq!(json["response"]["config"]["domain_name"], "cdn1.example.net");

    // Preview is not authoritative and must not create a snapshot
    assert!(db.snapshot_row("cdn1").await.is_none());
}

#[actix_web::test]
async fn every_structured_route_dispatches_to_a_handler() {
    // A disconnected backend makes every handler fail with 500, which is
    // enough to tell dispatch apart from a path that never left routing.
    let app = app_for(sea_orm::DatabaseConnection::default()).await;

    for uri in [
        "/api/v1/profiles",
        "/api/v1/profiles/1",
        "/api/v1/parameters",
        "/api/v1/profileparameters",
        "/api/v1/cdns/cdn1/snapshot",
        "/api/v1/cdns/cdn1/snapshot/new",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "GET {} did not reach its handler",
            uri
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/no-such-resource")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn profile_admin_round_trip_over_http() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;
    let cdn = db.seed_cdn("cdn1", "cdn1.example.net").await;

    let app = test_app(&db).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(serde_json::json!({
            "name": "EDGE1",
            "description": "edge tier",
            "cdnId": cdn.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    let id = json["response"]["id"].as_i64().unwrap();
    assert_eq!(json["response"]["name"], "EDGE1");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles?cdnId={}", cdn.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["response"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/profiles/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn legacy_ui_redirects_on_success_and_failure() {
    let Some(db) = TestDatabase::connect_from_env().await else {
        return;
    };
    db.reset().await;
    db.seed_cdn("cdn1", "cdn1.example.net").await;

    let app = test_app(&db).await;

    let req = test::TestRequest::put()
        .uri("/tools/write_crconfig/cdn1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(
        location,
        "/tools/flash_and_close/Successfully%20wrote%20the%20CRConfig.json%21"
    );

    // Unknown CDN still redirects, carrying an error message
    let req = test::TestRequest::put()
        .uri("/tools/write_crconfig/ghost")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/tools/flash_and_close/Error%3A"));
}
