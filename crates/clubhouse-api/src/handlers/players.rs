//! Player roster handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dto::{CreatePlayerRequest, PlayerResponse};
use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::extractors::{CurrentUser, Pagination, ValidatedJson};
use crate::state::AppState;

/// Add a player to a user's roster
///
/// Callers may only write to their own roster.
#[utoipa::path(
    post,
    path = "/users/{user_id}/players",
    tag = "players",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "Owning user id")),
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created", body = PlayerResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(user_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreatePlayerRequest>,
) -> ApiResult<(StatusCode, Json<PlayerResponse>)> {
    if identity.id != user_id {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let player = state
        .players
        .create(user_id, &request.name, request.handicap)
        .await?;

    tracing::info!(player_id = %player.id, owner_id = %user_id, "Player added to roster");

    Ok((StatusCode::CREATED, Json(player.into())))
}

/// List all players across the club
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-indexed)"),
        ("limit" = Option<u32>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "Players", body = Vec<PlayerResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
pub async fn list_players(
    State(state): State<Arc<AppState>>,
    CurrentUser(_identity): CurrentUser,
    Pagination(params): Pagination,
) -> ApiResult<Json<Vec<PlayerResponse>>> {
    let players = state
        .players
        .list(params.limit(1000), params.offset())
        .await?;

    Ok(Json(players.into_iter().map(PlayerResponse::from).collect()))
}
