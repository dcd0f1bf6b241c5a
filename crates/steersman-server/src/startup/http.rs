//! HTTP server setup.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, model::AppState};

/// Creates and binds the HTTP server.
///
/// Serves the structured snapshot API, the administrative API, and the
/// legacy compatibility endpoints.
pub fn server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(api::routes())
            .service(api::legacy::routes())
    })
    .bind((address, port))?
    .run())
}
