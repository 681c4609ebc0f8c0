//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use clubhouse_auth::Identity;
use clubhouse_db::models::DbUser;

use super::player::PlayerResponse;

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Account email, unique across the roster
    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "golfer@example.com")]
    pub email: String,
    /// Plaintext password; hashed before storage, never persisted as-is
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Public view of a user account (no credential material)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub max_handicap: i32,
}

impl From<DbUser> for UserResponse {
    fn from(user: DbUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            max_handicap: user.max_handicap,
        }
    }
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            is_active: identity.is_active,
            max_handicap: identity.max_handicap,
        }
    }
}

/// User account with its roster of players
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub max_handicap: i32,
    pub players: Vec<PlayerResponse>,
}

impl UserProfileResponse {
    pub fn new(user: UserResponse, players: Vec<PlayerResponse>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            max_handicap: user.max_handicap,
            players,
        }
    }
}
