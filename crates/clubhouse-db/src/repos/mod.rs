//! Repositories
//!
//! One repository per domain table. The traits let the HTTP layer run
//! against Postgres in production and the in-memory store in tests.

pub mod player;
pub mod user;

pub use player::PlayerRepo;
pub use user::UserRepo;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::{DbPlayer, DbUser};

/// User persistence operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user; fails with [`crate::DbError::Duplicate`] if the
    /// email is taken
    async fn create(&self, email: &str, password_hash: &str) -> DbResult<DbUser>;

    /// Find a user by primary key
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbUser>>;

    /// Find a user by unique email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<DbUser>>;

    /// List users, newest first
    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<DbUser>>;
}

/// Player persistence operations
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert a new player owned by a user
    async fn create(&self, owner_id: Uuid, name: &str, handicap: i32) -> DbResult<DbPlayer>;

    /// List players, newest first
    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<DbPlayer>>;

    /// List all players owned by a user
    async fn list_by_owner(&self, owner_id: Uuid) -> DbResult<Vec<DbPlayer>>;
}
