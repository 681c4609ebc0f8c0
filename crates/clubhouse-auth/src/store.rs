//! Credential store trait
//!
//! The auth core's only view of persistence: look a user up by email. The
//! database layer implements this over its user repository; tests implement
//! it in memory. Injected explicitly at construction - no globals.

use async_trait::async_trait;

use crate::error::AuthResult;
use crate::types::StoredUser;

/// Read-only lookup of user records by login identity
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a user by email
    ///
    /// `Ok(None)` means no such user; infrastructure failures surface as
    /// [`crate::AuthError::Store`].
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<StoredUser>>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// In-memory store for unit tests
    #[derive(Default)]
    pub(crate) struct MemoryCredentialStore {
        users: Mutex<HashMap<String, StoredUser>>,
    }

    impl MemoryCredentialStore {
        pub(crate) fn with_user(self, user: StoredUser) -> Self {
            self.users
                .lock()
                .unwrap()
                .insert(user.email.clone(), user);
            self
        }

        pub(crate) fn remove(&self, email: &str) {
            self.users.lock().unwrap().remove(email);
        }
    }

    #[async_trait]
    impl CredentialStore for MemoryCredentialStore {
        async fn find_by_email(&self, email: &str) -> AuthResult<Option<StoredUser>> {
            Ok(self.users.lock().unwrap().get(email).cloned())
        }
    }

    pub(crate) fn user(email: &str, password_hash: &str, is_active: bool) -> StoredUser {
        StoredUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            is_active,
            max_handicap: 24,
        }
    }
}
