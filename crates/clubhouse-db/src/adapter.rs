//! Credential store adapter
//!
//! Bridges the auth core's [`CredentialStore`] trait onto whichever
//! [`UserStore`] backs the service, translating rows and errors at the seam.

use std::sync::Arc;

use async_trait::async_trait;
use clubhouse_auth::{AuthError, AuthResult, CredentialStore, StoredUser};

use crate::repos::UserStore;

/// Adapts a [`UserStore`] into the auth core's credential lookup interface
#[derive(Clone)]
pub struct CredentialAdapter {
    users: Arc<dyn UserStore>,
}

impl CredentialAdapter {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CredentialStore for CredentialAdapter {
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<StoredUser>> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;

        Ok(user.map(StoredUser::from))
    }
}
