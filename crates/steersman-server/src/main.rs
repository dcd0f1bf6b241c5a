//! Main entry point for the Steersman snapshot control plane.
//!
//! Sets up configuration, logging, metrics, the database connection, and
//! the HTTP server.

use std::sync::Arc;

use tracing::info;

use steersman_server::{
    model::{AppState, Configuration},
    startup,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();

    let logging_config = startup::LoggingConfig::from_config(
        configuration.log_dir(),
        configuration.log_console_output(),
        configuration.log_file_enabled(),
        configuration.log_level(),
    );
    let _logging_guard = startup::init_logging(&logging_config)?;

    steersman_server::metrics::init_metrics();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))?;

    let database_connection = configuration.database_connection().await?;
    info!("Database connection established");

    let address = configuration.server_address();
    let port = configuration.server_port();
    let app_state = Arc::new(AppState::new(database_connection, configuration));

    info!("Steersman listening on {}:{}", address, port);
    startup::server(app_state, address, port)?.await?;

    Ok(())
}
