//! Authenticator
//!
//! Verifies an email/password pair against the credential store and yields a
//! validated identity. Read-only: no lockout counters, no side effects.

use std::sync::Arc;

use crate::error::{AuthError, AuthResult};
use crate::password::PasswordService;
use crate::store::CredentialStore;
use crate::types::Identity;

/// Combines the credential store and password hasher to verify logins
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    password: PasswordService,
}

impl Authenticator {
    /// Create a new authenticator
    pub fn new(store: Arc<dyn CredentialStore>, password: PasswordService) -> Self {
        Self { store, password }
    }

    /// Verify a username/password pair and return the resolved identity
    ///
    /// Unknown email, wrong password, and an unparseable stored hash all
    /// collapse into [`AuthError::InvalidCredentials`] - callers must not be
    /// able to enumerate accounts. Store faults propagate separately.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let verified = self
            .password
            .verify(password, &user.password_hash)
            .unwrap_or(false);

        if !verified {
            tracing::debug!(email = %email, "Login verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::tests::test_config;
    use crate::store::tests::{user, MemoryCredentialStore};

    fn authenticator_with(users: Vec<crate::types::StoredUser>) -> Authenticator {
        let mut store = MemoryCredentialStore::default();
        for u in users {
            store = store.with_user(u);
        }
        Authenticator::new(Arc::new(store), PasswordService::new(test_config()))
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let password = PasswordService::new(test_config());
        let hash = password.hash("correct horse battery").unwrap();
        let auth = authenticator_with(vec![user("alice@example.com", &hash, true)]);

        let identity = auth
            .authenticate("alice@example.com", "correct horse battery")
            .await
            .unwrap();

        assert_eq!(identity.email, "alice@example.com");
        assert!(identity.is_active);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_identical() {
        let password = PasswordService::new(test_config());
        let hash = password.hash("correct horse battery").unwrap();
        let auth = authenticator_with(vec![user("alice@example.com", &hash, true)]);

        let wrong_password = auth
            .authenticate("alice@example.com", "wrong password")
            .await
            .unwrap_err();
        let unknown_user = auth
            .authenticate("nobody@example.com", "correct horse battery")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_fails_as_invalid_credentials() {
        // A malformed hash must not leak as a distinct failure
        let auth = authenticator_with(vec![user("alice@example.com", "garbage", true)]);

        let result = auth.authenticate("alice@example.com", "whatever12").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
