//! User repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::models::DbUser;
use crate::repos::UserStore;

/// Postgres-backed user repository
///
/// Each call acquires a connection from the pool for the duration of the
/// query and releases it on every exit path.
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn create(&self, email: &str, password_hash: &str) -> DbResult<DbUser> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING
                id, email, password_hash, is_active, max_handicap,
                created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.constraint() == Some("users_email_key") {
                    return DbError::Duplicate(format!("Email {} already registered", email));
                }
            }
            DbError::Query(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT
                id, email, password_hash, is_active, max_handicap,
                created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT
                id, email, password_hash, is_active, max_handicap,
                created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<DbUser>> {
        let users = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT
                id, email, password_hash, is_active, max_handicap,
                created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
