//! Session Resolver
//!
//! Resolves an inbound bearer token to the current caller's identity and
//! enforces the active-account invariant. Per request the flow is
//! `TokenPresented -> Decoded -> UserLoaded -> ActiveChecked -> Authorized`;
//! a failure at any step is terminal - the caller re-authenticates instead
//! of retrying resolution.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{AuthError, AuthResult};
use crate::store::CredentialStore;
use crate::token::TokenCodec;
use crate::types::Identity;

/// Resolves bearer tokens into request identities
#[derive(Clone)]
pub struct SessionResolver {
    store: Arc<dyn CredentialStore>,
    tokens: TokenCodec,
}

impl SessionResolver {
    /// Create a new session resolver
    pub fn new(store: Arc<dyn CredentialStore>, tokens: TokenCodec) -> Self {
        Self { store, tokens }
    }

    /// Decode a token and load the identity it names
    ///
    /// Every codec failure and a subject that no longer exists all map to
    /// [`AuthError::InvalidToken`]; a caller cannot distinguish "token
    /// expired" from "user deleted".
    pub async fn resolve(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Identity> {
        let claims = self.tokens.decode(token, now)?;

        let user = self
            .store
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(user.into())
    }

    /// Enforce the active-account invariant
    ///
    /// `is_active == false` rejects; active identities pass through
    /// unchanged.
    pub fn require_active(&self, identity: Identity) -> AuthResult<Identity> {
        if !identity.is_active {
            tracing::debug!(email = %identity.email, "Rejected inactive account");
            return Err(AuthError::InactiveAccount);
        }
        Ok(identity)
    }

    /// Resolve and require an active account in one step
    ///
    /// The composed path used by protected endpoints.
    pub async fn resolve_active(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Identity> {
        let identity = self.resolve(token, now).await?;
        self.require_active(identity)
    }
}
