//! Core authentication types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record as the credential store hands it to the auth core.
///
/// This is the only shape the auth core knows; the persistence layer maps its
/// own rows into it.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: Uuid,
    /// Unique email, used as the login identity
    pub email: String,
    /// Argon2id PHC string, never the plaintext
    pub password_hash: String,
    /// Gates whether a resolved identity may be used downstream
    pub is_active: bool,
    /// Domain attribute, carried through untouched
    pub max_handicap: i32,
}

/// The resolved, authenticated representation of a user for one request.
///
/// Identical to [`StoredUser`] minus the password hash, which never leaves
/// the auth core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub max_handicap: i32,
}

impl From<StoredUser> for Identity {
    fn from(user: StoredUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            max_handicap: user.max_handicap,
        }
    }
}

/// Claims embedded in an access token
///
/// Created at login, serialized into the token, and discarded once decoded on
/// each request. Never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's email
    pub sub: String,
    /// Absolute expiry, unix seconds UTC
    pub exp: i64,
}
