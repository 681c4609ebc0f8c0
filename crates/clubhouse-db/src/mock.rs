//! In-memory store for tests
//!
//! Implements the same store traits as the Postgres repositories, including
//! the unique-email constraint, so HTTP tests run without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::models::{DbPlayer, DbUser};
use crate::repos::{PlayerStore, UserStore};

/// In-memory stand-in for the database
#[derive(Default, Clone)]
pub struct MemoryDb {
    users: Arc<RwLock<HashMap<Uuid, DbUser>>>,
    players: Arc<RwLock<HashMap<Uuid, DbPlayer>>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a user's active flag, for exercising the inactive-account path
    pub async fn set_active(&self, email: &str, is_active: bool) {
        let mut users = self.users.write().await;
        if let Some(user) = users.values_mut().find(|u| u.email == email) {
            user.is_active = is_active;
        }
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryDb {
    async fn create(&self, email: &str, password_hash: &str) -> DbResult<DbUser> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == email) {
            return Err(DbError::Duplicate(format!(
                "Email {} already registered",
                email
            )));
        }

        let now = Utc::now();
        let user = DbUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            is_active: true,
            max_handicap: 24,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbUser>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<DbUser>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<DbUser>> {
        let users = self.users.read().await;
        let mut all: Vec<DbUser> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

#[async_trait]
impl PlayerStore for MemoryDb {
    async fn create(&self, owner_id: Uuid, name: &str, handicap: i32) -> DbResult<DbPlayer> {
        let player = DbPlayer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            handicap,
            owner_id,
            created_at: Utc::now(),
        };
        self.players
            .write()
            .await
            .insert(player.id, player.clone());

        Ok(player)
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<DbPlayer>> {
        let players = self.players.read().await;
        let mut all: Vec<DbPlayer> = players.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> DbResult<Vec<DbPlayer>> {
        let players = self.players.read().await;
        let mut owned: Vec<DbPlayer> = players
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = MemoryDb::new();

        let created = UserStore::create(&db, "alice@example.com", "hash")
            .await
            .unwrap();
        assert!(created.is_active);
        assert_eq!(created.max_handicap, 24);

        let by_email = db.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);

        let by_id = db.find_by_id(created.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = MemoryDb::new();

        UserStore::create(&db, "alice@example.com", "hash")
            .await
            .unwrap();
        let result = UserStore::create(&db, "alice@example.com", "other-hash").await;

        assert!(matches!(result, Err(DbError::Duplicate(_))));
        assert_eq!(db.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_players_by_owner() {
        let db = MemoryDb::new();
        let alice = UserStore::create(&db, "alice@example.com", "hash")
            .await
            .unwrap();
        let bob = UserStore::create(&db, "bob@example.com", "hash")
            .await
            .unwrap();

        PlayerStore::create(&db, alice.id, "Jordan", 4).await.unwrap();
        PlayerStore::create(&db, alice.id, "Casey", 12).await.unwrap();
        PlayerStore::create(&db, bob.id, "Riley", 20).await.unwrap();

        let owned = db.list_by_owner(alice.id).await.unwrap();
        assert_eq!(owned.len(), 2);

        let all = PlayerStore::list(&db, 10, 0).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
