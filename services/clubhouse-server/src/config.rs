//! Server Configuration
//!
//! Configuration management for the Clubhouse API server.
//! Supports environment variables, config files, and CLI arguments.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use clubhouse_auth::AuthConfig;
use clubhouse_db::DatabaseConfig;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server binding configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// API configuration
    #[serde(default)]
    pub api: ApiSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server binding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Run migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            run_migrations: true,
        }
    }
}

impl ServerSettings {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))
    }

    /// Get the shutdown timeout duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,

    /// Enable response compression
    #[serde(default = "default_true")]
    pub enable_compression: bool,

    /// Serve Swagger UI at /swagger-ui
    #[serde(default = "default_true")]
    pub enable_docs: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: default_cors_origins(),
            enable_tracing: true,
            enable_compression: true,
            enable_docs: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_shutdown_timeout() -> u64 {
    10
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl ServerConfig {
    /// Load configuration from environment and optional config file
    ///
    /// Precedence, lowest to highest: built-in defaults, `config/default.*`,
    /// `config/local.*`, an explicit file, then `CLUBHOUSE__`-prefixed
    /// environment variables (e.g. `CLUBHOUSE__SERVER__PORT=8080`). The JWT
    /// secret additionally honors the plain `JWT_SECRET` variable.
    pub fn load(config_path: Option<&str>) -> anyhow::Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let mut builder = config::Config::builder();

        builder = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CLUBHOUSE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        let mut server_config: ServerConfig = config.try_deserialize().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not parse configuration, falling back to defaults");
            ServerConfig::default()
        });

        // Plain env vars win for the two secrets operators actually set
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            server_config.auth.token.secret = secret;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            server_config.database.postgres_url = url;
        }

        Ok(server_config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            api: ApiSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.level, "info");
        assert!(config.server.run_migrations);
    }

    #[test]
    fn test_socket_addr() {
        let settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..ServerSettings::default()
        };
        assert_eq!(
            settings.socket_addr().unwrap().to_string(),
            "127.0.0.1:9000"
        );
    }
}
