//! API route definitions

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// API routes, state applied by the caller
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/token", post(handlers::auth::login))
        .route(
            "/users",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route("/users/me", get(handlers::users::get_me))
        .route("/users/:user_id", get(handlers::users::get_user))
        .route(
            "/users/:user_id/players",
            post(handlers::players::create_player),
        )
        .route("/players", get(handlers::players::list_players))
}

/// Swagger UI with the generated OpenAPI document
pub fn swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
