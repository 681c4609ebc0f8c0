//! Clubhouse REST API
//!
//! HTTP surface for the Clubhouse roster service.
//!
//! # API Structure
//!
//! ```text
//! /
//! ├── /token                      - Credential login, issues bearer tokens
//! ├── /users                      - Registration and account listing
//! ├── /users/me                   - Authenticated user's own profile
//! ├── /users/:user_id             - Account lookup
//! ├── /users/:user_id/players     - Add a player to a roster
//! ├── /players                    - Club-wide player listing (token-gated)
//! ├── /health                     - Liveness probe
//! └── /swagger-ui                 - API documentation
//! ```
//!
//! Authentication is a JWT bearer token in the `Authorization` header,
//! obtained from `/token`.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::HeaderName;
use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Enable CORS for browser clients
    pub enable_cors: bool,
    /// Allowed origins for CORS
    pub cors_origins: Vec<String>,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// Enable response compression
    pub enable_compression: bool,
    /// Serve Swagger UI at /swagger-ui
    pub enable_docs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            enable_tracing: true,
            enable_compression: true,
            enable_docs: true,
        }
    }
}

/// Create the main API router with all middleware
pub fn create_router(state: Arc<AppState>, config: ApiConfig) -> Router {
    let mut app = routes::api_routes().with_state(state);

    if config.enable_docs {
        app = app.merge(routes::swagger_routes());
    }

    let x_request_id = HeaderName::from_static("x-request-id");
    app = app
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(x_request_id));

    if config.enable_tracing {
        app = app.layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        );
    }

    if config.enable_compression {
        app = app.layer(CompressionLayer::new());
    }

    if config.enable_cors {
        let cors = if config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(
                    config
                        .cors_origins
                        .iter()
                        .filter_map(|o| o.parse().ok())
                        .collect::<Vec<_>>(),
                )
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers(Any)
        };
        app = app.layer(cors);
    }

    app
}

/// Create a minimal router for testing
pub fn create_test_router(state: Arc<AppState>) -> Router {
    routes::api_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert!(config.enable_cors);
        assert!(config.enable_tracing);
        assert!(config.enable_compression);
        assert!(config.enable_docs);
    }
}
