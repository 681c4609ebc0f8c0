//! Clubhouse Authentication Core
//!
//! Authentication for the Clubhouse roster service:
//!
//! - **Password Security**: Argon2id hashing (OWASP recommended)
//! - **Bearer Tokens**: stateless HMAC-signed JWTs with a short TTL
//! - **Credential Store**: a narrow trait the persistence layer implements
//! - **Session Resolution**: token -> identity, with active-account gating
//!
//! # Security Features
//!
//! - Constant-time password verification
//! - Salted hashes: the same password never hashes to the same string twice
//! - Unknown-user and wrong-password failures are indistinguishable to callers
//! - Signing secret supplied via configuration, never hard-coded
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Authentication Flow                     │
//! ├─────────────────────────────────────────────────────────┤
//! │  Login:   email+password → Authenticator → TokenCodec   │
//! │                │                              │          │
//! │                ▼                              ▼          │
//! │        CredentialStore                  signed token     │
//! │                                                          │
//! │  Request: bearer token → SessionResolver → Identity      │
//! │                │               │                         │
//! │                ▼               ▼                         │
//! │           TokenCodec    CredentialStore + active check   │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod login;
pub mod password;
pub mod session;
pub mod store;
pub mod token;
pub mod types;

pub use config::{AuthConfig, PasswordConfig, TokenConfig};
pub use error::{AuthError, AuthResult, TokenError};
pub use login::Authenticator;
pub use password::PasswordService;
pub use session::SessionResolver;
pub use store::CredentialStore;
pub use token::TokenCodec;
pub use types::{Claims, Identity, StoredUser};

use std::sync::Arc;

/// Main authentication service combining all auth components
///
/// Constructed once at service startup from a validated [`AuthConfig`] and an
/// injected credential store handle; cloned freely into request state.
#[derive(Clone)]
pub struct AuthService {
    pub password: PasswordService,
    pub tokens: TokenCodec,
    pub authenticator: Authenticator,
    pub sessions: SessionResolver,
}

impl AuthService {
    /// Create a new auth service with all components
    pub fn new(store: Arc<dyn CredentialStore>, config: AuthConfig) -> AuthResult<Self> {
        config
            .validate()
            .map_err(|errors| AuthError::Config(errors.join("; ")))?;

        let password = PasswordService::new(config.password.clone());
        let tokens = TokenCodec::new(&config.token)?;
        let authenticator = Authenticator::new(store.clone(), password.clone());
        let sessions = SessionResolver::new(store, tokens.clone());

        Ok(Self {
            password,
            tokens,
            authenticator,
            sessions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::MemoryCredentialStore;

    #[test]
    fn test_auth_service_rejects_short_secret() {
        let store = Arc::new(MemoryCredentialStore::default());
        let mut config = AuthConfig::default();
        config.token.secret = "too-short".to_string();

        let result = AuthService::new(store, config);
        assert!(matches!(result, Err(AuthError::Config(_))));
    }

    #[test]
    fn test_auth_service_creation() {
        let store = Arc::new(MemoryCredentialStore::default());
        let mut config = AuthConfig::default();
        config.token.secret = "test-secret-key-for-tokens-min-32-bytes!".to_string();

        assert!(AuthService::new(store, config).is_ok());
    }
}
