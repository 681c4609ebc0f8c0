//! Player repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::DbPlayer;
use crate::repos::PlayerStore;

/// Postgres-backed player repository
#[derive(Clone)]
pub struct PlayerRepo {
    pool: PgPool,
}

impl PlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerStore for PlayerRepo {
    async fn create(&self, owner_id: Uuid, name: &str, handicap: i32) -> DbResult<DbPlayer> {
        let player = sqlx::query_as::<_, DbPlayer>(
            r#"
            INSERT INTO players (id, name, handicap, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, handicap, owner_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(handicap)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(player)
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<DbPlayer>> {
        let players = sqlx::query_as::<_, DbPlayer>(
            r#"
            SELECT id, name, handicap, owner_id, created_at
            FROM players
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> DbResult<Vec<DbPlayer>> {
        let players = sqlx::query_as::<_, DbPlayer>(
            r#"
            SELECT id, name, handicap, owner_id, created_at
            FROM players
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }
}
