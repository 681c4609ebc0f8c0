//! User account handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, PlayerResponse, UserProfileResponse, UserResponse};
use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::extractors::{CurrentUser, Pagination, ValidatedJson};
use crate::state::AppState;

/// Register a new user account
///
/// The password is hashed before it touches storage. A duplicate email is
/// reported as a 400 without creating anything.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Email already registered or invalid input", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let password_hash = state.auth.password.hash(&request.password)?;

    let user = state.users.create(&request.email, &password_hash).await?;

    tracing::info!(email = %user.email, user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// List user accounts
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-indexed)"),
        ("limit" = Option<u32>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "User accounts", body = Vec<UserResponse>),
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Pagination(params): Pagination,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .users
        .list(params.limit(1000), params.offset())
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get the authenticated user's own profile, including their players
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Inactive user", body = ErrorResponse),
    )
)]
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
) -> ApiResult<Json<UserProfileResponse>> {
    let players = state.players.list_by_owner(identity.id).await?;

    Ok(Json(UserProfileResponse::new(
        identity.into(),
        players.into_iter().map(PlayerResponse::from).collect(),
    )))
}

/// Get a user account by id, including their players
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User account", body = UserProfileResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserProfileResponse>> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let players = state.players.list_by_owner(user.id).await?;

    Ok(Json(UserProfileResponse::new(
        user.into(),
        players.into_iter().map(PlayerResponse::from).collect(),
    )))
}
