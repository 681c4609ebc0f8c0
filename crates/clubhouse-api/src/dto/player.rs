//! Player DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use clubhouse_db::models::DbPlayer;

/// Request to add a player to a user's roster
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    /// Player display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Old Tom Morris")]
    pub name: String,
    /// Course handicap
    #[serde(default)]
    #[validate(range(min = 0, max = 54, message = "Handicap must be between 0 and 54"))]
    pub handicap: i32,
}

/// Public view of a player
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub handicap: i32,
    pub owner_id: Uuid,
}

impl From<DbPlayer> for PlayerResponse {
    fn from(player: DbPlayer) -> Self {
        Self {
            id: player.id,
            name: player.name,
            handicap: player.handicap,
            owner_id: player.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_player_request_validation() {
        let valid = CreatePlayerRequest {
            name: "Old Tom Morris".to_string(),
            handicap: 12,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreatePlayerRequest {
            name: String::new(),
            handicap: 12,
        };
        assert!(empty_name.validate().is_err());

        let wild_handicap = CreatePlayerRequest {
            name: "Sandbagger".to_string(),
            handicap: 99,
        };
        assert!(wild_handicap.validate().is_err());
    }

    #[test]
    fn test_handicap_defaults_to_zero() {
        let request: CreatePlayerRequest =
            serde_json::from_str(r#"{"name": "Scratch"}"#).unwrap();
        assert_eq!(request.handicap, 0);
    }
}
