use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::load_league;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::errors::DomainError;
use crate::domain::player::{player::validate_player_name, Player, PlayerStatus};
use crate::domain::repositories::PlayerRepository;
use crate::infrastructure::repositories::PostgresPlayerRepository;

/// One contestant in a bulk import request
#[derive(Debug, Deserialize)]
pub struct ImportPlayer {
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub tribe: Option<String>,
    #[serde(default)]
    pub status: Option<PlayerStatus>,
}

/// Request body for bulk import
#[derive(Debug, Deserialize)]
pub struct ImportPlayersRequest {
    pub players: Vec<ImportPlayer>,
}

/// Response from bulk import
#[derive(Debug, Serialize)]
pub struct ImportPlayersResponse {
    pub message: String,
    pub players: Vec<Player>,
}

/// Request body for player edits
#[derive(Debug, Deserialize)]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub tribe: Option<String>,
    pub status: Option<PlayerStatus>,
}

/// All contestants in the league
///
/// GET /api/leagues/:league_id/players
pub async fn list_players(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = PostgresPlayerRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    Ok(Json(players))
}

/// Bulk import contestants
///
/// POST /api/leagues/:league_id/players/import
pub async fn import_players(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<ImportPlayersRequest>,
) -> Result<(StatusCode, Json<ImportPlayersResponse>), ApiError> {
    if req.players.is_empty() {
        return Err(ApiError::bad_request("Players array required"));
    }

    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let players = req
        .players
        .into_iter()
        .map(|p| {
            Player::new(
                league_id,
                p.name,
                p.photo_url.unwrap_or_default(),
                p.tribe,
                p.status.unwrap_or_default(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    PostgresPlayerRepository::new(state.pool.clone())
        .create_many(&players)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ImportPlayersResponse {
            message: format!("{} players imported", players.len()),
            players,
        }),
    ))
}

/// Edit a contestant
///
/// PATCH /api/leagues/:league_id/players/:player_id
pub async fn update_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path((league_id, player_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let player_repo = PostgresPlayerRepository::new(state.pool.clone());
    let mut player = player_repo
        .find_by_id(league_id, player_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Player"))?;

    if let Some(name) = req.name {
        player.name = validate_player_name(&name)?;
    }
    if let Some(photo_url) = req.photo_url {
        player.photo_url = photo_url;
    }
    if let Some(tribe) = req.tribe {
        player.tribe = Some(tribe);
    }
    if let Some(status) = req.status {
        player.status = status;
    }

    player_repo.update(&player).await?;

    Ok(Json(player))
}

/// Delete a contestant
///
/// DELETE /api/leagues/:league_id/players/:player_id
pub async fn delete_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path((league_id, player_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let deleted = PostgresPlayerRepository::new(state.pool.clone())
        .delete(league_id, player_id)
        .await?;

    if !deleted {
        return Err(DomainError::not_found("Player").into());
    }

    Ok(Json(serde_json::json!({ "message": "Player deleted" })))
}
