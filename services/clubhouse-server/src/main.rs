//! Clubhouse API Server
//!
//! REST API server for the Clubhouse roster service: account registration,
//! bearer-token login, and per-user player rosters.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (reads .env if present)
//! clubhouse-server
//!
//! # Start with custom config
//! clubhouse-server --config /path/to/config.toml
//!
//! # Start with environment overrides
//! CLUBHOUSE__SERVER__PORT=8080 JWT_SECRET=... clubhouse-server
//! ```

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clubhouse_api::{create_router, ApiConfig, AppState};
use clubhouse_auth::AuthService;
use clubhouse_db::{CredentialAdapter, Database};

use crate::config::ServerConfig;

/// Clubhouse API Server
#[derive(Parser, Debug)]
#[command(name = "clubhouse-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, env = "CLUBHOUSE_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "CLUBHOUSE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CLUBHOUSE_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CLUBHOUSE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, env = "CLUBHOUSE_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// JWT secret key
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut server_config = ServerConfig::load(args.config.as_deref())?;

    // CLI arguments win over file and environment
    if let Some(host) = args.host {
        server_config.server.host = host;
    }
    if let Some(port) = args.port {
        server_config.server.port = port;
    }
    if let Some(db_url) = args.database_url {
        server_config.database.postgres_url = db_url;
    }
    if let Some(jwt_secret) = args.jwt_secret {
        server_config.auth.token.secret = jwt_secret;
    }
    server_config.logging.level = args.log_level;
    server_config.logging.format = args.log_format;

    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Clubhouse API Server"
    );

    // Fail fast on bad auth configuration (missing or short secret, bad TTL)
    if let Err(errors) = server_config.auth.validate() {
        anyhow::bail!("Invalid auth configuration: {}", errors.join("; "));
    }

    let db = init_database(&server_config).await?;

    let users = Arc::new(db.user_repo());
    let players = Arc::new(db.player_repo());

    let credentials = Arc::new(CredentialAdapter::new(users.clone()));
    let auth = AuthService::new(credentials, server_config.auth.clone())
        .map_err(|e| anyhow::anyhow!("Auth service initialization failed: {}", e))?;

    let state = Arc::new(AppState::new(users, players, auth));

    let api_config = ApiConfig {
        enable_cors: server_config.api.enable_cors,
        cors_origins: server_config.api.cors_origins.clone(),
        enable_tracing: server_config.api.enable_tracing,
        enable_compression: server_config.api.enable_compression,
        enable_docs: server_config.api.enable_docs,
    };

    let app = create_router(state, api_config);

    let addr = server_config.server.socket_addr()?;

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.server.shutdown_timeout()))
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    Ok(())
}

/// Connect to PostgreSQL and run migrations
async fn init_database(config: &ServerConfig) -> anyhow::Result<Database> {
    let db = Database::connect(&config.database).await?;

    if config.server.run_migrations {
        db.migrate().await?;
    }

    if !db.health_check().await {
        anyhow::bail!("Database health check failed");
    }

    Ok(db)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to complete..."
    );

    tokio::time::sleep(timeout).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["clubhouse-server", "--port", "8080"]);
        assert_eq!(args.port, Some(8080));
    }
}
