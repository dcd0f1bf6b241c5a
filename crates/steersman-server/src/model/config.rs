//! Configuration management for the Steersman server
//!
//! Loads configuration from `conf/application.yml`, overlaid with
//! `STEERSMAN_*` environment variables and command-line flags.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let config_file = args
            .config_file
            .unwrap_or_else(|| "conf/application.yml".to_string());

        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("steersman")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name(&config_file));

        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", v as i64)
                .expect("Failed to set server port override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config.get_int("server.port").unwrap_or(3000) as u16
    }

    /// Control-plane version, recorded as tm_version in every CRConfig
    pub fn version(&self) -> String {
        self.config
            .get_string("steersman.version")
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn log_dir(&self) -> Option<String> {
        self.config.get_string("logging.dir").ok()
    }

    pub fn log_console_output(&self) -> bool {
        self.config.get_bool("logging.console").unwrap_or(true)
    }

    pub fn log_file_enabled(&self) -> bool {
        self.config.get_bool("logging.file").unwrap_or(true)
    }

    pub fn log_level(&self) -> String {
        self.config
            .get_string("logging.level")
            .unwrap_or("info".to_string())
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self
            .config
            .get_int("db.pool.maximumPoolSize")
            .unwrap_or(100) as u32;
        let min_connections = self.config.get_int("db.pool.minimumPoolSize").unwrap_or(1) as u32;
        let connect_timeout = self.config.get_int("db.pool.connectionTimeout").unwrap_or(30) as u64;
        let acquire_timeout = self.config.get_int("db.pool.acquireTimeout").unwrap_or(8) as u64;
        let idle_timeout = self.config.get_int("db.pool.idleTimeout").unwrap_or(10) as u64;
        let max_lifetime = self.config.get_int("db.pool.maxLifetime").unwrap_or(1800) as u64;
        let sqlx_logging = self.config.get_bool("db.pool.sqlxLogging").unwrap_or(false);

        let url = self.config.get_string("db.url")?;

        let mut opt = ConnectOptions::new(url);

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}
