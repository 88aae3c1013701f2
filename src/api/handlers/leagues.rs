use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::load_league;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::league::{League, LeagueSettings, LeagueSettingsPatch, LeagueStatus};
use crate::domain::repositories::LeagueRepository;
use crate::infrastructure::repositories::PostgresLeagueRepository;

/// Request body for creating a league
#[derive(Debug, Deserialize)]
pub struct CreateLeagueRequest {
    pub name: String,
    #[serde(default)]
    pub settings: Option<LeagueSettingsPatch>,
}

/// Request body for the settings PATCH
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub settings: LeagueSettingsPatch,
}

/// Request body for status changes
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: LeagueStatus,
}

/// Create a new league
///
/// POST /api/leagues
pub async fn create_league(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<CreateLeagueRequest>,
) -> Result<(StatusCode, Json<League>), ApiError> {
    let settings = LeagueSettings::with_defaults(req.settings.unwrap_or_default())?;
    let league = League::new(req.name, user_id, settings)?;

    PostgresLeagueRepository::new(state.pool.clone())
        .create(&league)
        .await?;

    Ok((StatusCode::CREATED, Json(league)))
}

/// Leagues the caller belongs to
///
/// GET /api/leagues/mine
pub async fn my_leagues(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<Vec<League>>, ApiError> {
    let leagues = PostgresLeagueRepository::new(state.pool.clone())
        .list_for_user(user_id)
        .await?;

    Ok(Json(leagues))
}

/// Get league info
///
/// GET /api/leagues/:league_id
pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<League>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    Ok(Json(league))
}

/// Update league settings
///
/// PATCH /api/leagues/:league_id/settings
pub async fn update_settings(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<League>, ApiError> {
    let mut league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    league.settings.apply(req.settings)?;

    PostgresLeagueRepository::new(state.pool.clone())
        .update_settings(league_id, &league.settings)
        .await?;

    Ok(Json(league))
}

/// Update league status
///
/// POST /api/leagues/:league_id/status
pub async fn update_status(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<League>, ApiError> {
    let mut league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    PostgresLeagueRepository::new(state.pool.clone())
        .set_status(league_id, req.status)
        .await?;

    league.status = req.status;
    Ok(Json(league))
}
