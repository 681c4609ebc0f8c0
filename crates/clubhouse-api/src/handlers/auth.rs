//! Authentication handlers

use std::sync::Arc;

use axum::{extract::State, Form, Json};
use chrono::Utc;

use crate::dto::{TokenRequest, TokenResponse};
use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::state::AppState;

/// Exchange email/password credentials for a bearer token
///
/// Form-encoded request in the OAuth2 password-grant shape; `username`
/// carries the email. Failures are always the same generic 401 so the
/// endpoint cannot be used to probe which accounts exist.
#[utoipa::path(
    post,
    path = "/token",
    tag = "auth",
    request_body(content = TokenRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(request): Form<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let identity = state
        .auth
        .authenticator
        .authenticate(&request.username, &request.password)
        .await?;

    let token = state
        .auth
        .tokens
        .issue(&identity.email, Utc::now())
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(email = %identity.email, "User logged in");

    let expires_in = state.auth.tokens.ttl().num_seconds();

    Ok(Json(TokenResponse::new(token, expires_in)))
}
