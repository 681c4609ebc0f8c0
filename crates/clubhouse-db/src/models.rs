//! Database models - mapped from PostgreSQL tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub max_handicap: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbPlayer {
    pub id: Uuid,
    pub name: String,
    pub handicap: i32,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for clubhouse_auth::StoredUser {
    fn from(user: DbUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            is_active: user.is_active,
            max_handicap: user.max_handicap,
        }
    }
}
