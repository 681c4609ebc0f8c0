//! OpenAPI documentation

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::{
    CreatePlayerRequest, CreateUserRequest, PlayerResponse, TokenRequest, TokenResponse,
    UserProfileResponse, UserResponse,
};
use crate::error::ErrorResponse;
use crate::handlers::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clubhouse API",
        description = "Golf club roster service: accounts, bearer-token login, players",
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::auth::login,
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::get_me,
        crate::handlers::users::get_user,
        crate::handlers::players::create_player,
        crate::handlers::players::list_players,
    ),
    components(schemas(
        TokenRequest,
        TokenResponse,
        CreateUserRequest,
        UserResponse,
        UserProfileResponse,
        CreatePlayerRequest,
        PlayerResponse,
        HealthResponse,
        ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and token issuance"),
        (name = "users", description = "User accounts"),
        (name = "players", description = "Player rosters"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/token"));
        assert!(doc.paths.paths.contains_key("/users/me"));
    }
}
