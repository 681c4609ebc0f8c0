//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request (form-encoded, OAuth2 password grant shape)
///
/// `username` carries the account email.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// Account email
    #[schema(example = "golfer@example.com")]
    pub username: String,
    /// Account password
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Always `"bearer"`
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Seconds until the token expires
    #[schema(example = 1800)]
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_type_is_bearer() {
        let response = TokenResponse::new("abc".to_string(), 1800);
        assert_eq!(response.token_type, "bearer");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc");
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["expires_in"], 1800);
    }
}
