//! Clubhouse Database Layer
//!
//! PostgreSQL persistence for the Clubhouse roster service.
//!
//! # Repository Pattern
//!
//! Each domain table has its own repository behind a store trait
//! ([`UserStore`], [`PlayerStore`]); handlers depend on the traits, so the
//! `mock` feature can swap in an in-memory store for tests. Connections are
//! pooled and scoped per query - nothing holds a connection across requests.

pub mod adapter;
pub mod config;
pub mod error;
pub mod models;
pub mod repos;

#[cfg(feature = "mock")]
pub mod mock;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

pub use adapter::CredentialAdapter;
pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use models::{DbPlayer, DbUser};
pub use repos::{PlayerRepo, PlayerStore, UserRepo, UserStore};

#[cfg(feature = "mock")]
pub use mock::MemoryDb;

/// Database connection pool
pub struct Database {
    /// PostgreSQL connection pool
    pub pg: PgPool,
}

impl Database {
    /// Connect to PostgreSQL
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!("Connecting to PostgreSQL: {}", config.postgres_url_masked());

        let pg = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.postgres_url)
            .await
            .map_err(|e| DbError::Connection(format!("PostgreSQL: {}", e)))?;

        info!("Connected to PostgreSQL");

        Ok(Self { pg })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> DbResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pg)
            .await
            .map_err(|e| DbError::Migration(e.to_string()))?;
        info!("Migrations complete");
        Ok(())
    }

    /// Health check: one round trip to the database
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pg).await.is_ok()
    }

    /// Create a user repository over this pool
    pub fn user_repo(&self) -> UserRepo {
        UserRepo::new(self.pg.clone())
    }

    /// Create a player repository over this pool
    pub fn player_repo(&self) -> PlayerRepo {
        PlayerRepo::new(self.pg.clone())
    }
}
