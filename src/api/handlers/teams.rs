use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::{attach_players, load_league, TeamWithPlayers};
use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::Team;
use crate::infrastructure::repositories::{PostgresPlayerRepository, PostgresTeamRepository};

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

/// Create a team
///
/// POST /api/leagues/:league_id/teams
pub async fn create_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let league = load_league(&state.pool, league_id).await?;

    let team_repo = PostgresTeamRepository::new(state.pool.clone());

    if team_repo.find_by_member(league_id, user_id).await?.is_some() {
        return Err(DomainError::conflict("You already belong to a team in this league").into());
    }

    let team_count = team_repo.count_by_league(league_id).await?;
    if team_count >= league.settings.max_teams as i64 {
        return Err(DomainError::conflict("League has reached maximum teams").into());
    }

    let team = Team::new(
        league_id,
        req.name,
        user_id,
        league.settings.members_per_team,
    )?;
    team_repo.create(&team).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// Join a team
///
/// POST /api/leagues/:league_id/teams/:team_id/join
pub async fn join_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path((league_id, team_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Team>, ApiError> {
    let team_repo = PostgresTeamRepository::new(state.pool.clone());

    if team_repo.find_by_member(league_id, user_id).await?.is_some() {
        return Err(DomainError::conflict("You already belong to a team in this league").into());
    }

    let mut team = team_repo
        .find_by_id(league_id, team_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Team"))?;

    if team.is_full() {
        return Err(DomainError::conflict("Team is full").into());
    }

    team_repo.add_member(team_id, user_id).await?;
    team.members.push(user_id);

    Ok(Json(team))
}

/// All teams with their rosters, in draft order
///
/// GET /api/leagues/:league_id/teams
pub async fn list_teams(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<TeamWithPlayers>>, ApiError> {
    let teams = PostgresTeamRepository::new(state.pool.clone())
        .list_by_draft_order(league_id)
        .await?;
    let players = PostgresPlayerRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    Ok(Json(attach_players(teams, players)))
}

/// Team standings by total points
///
/// GET /api/leagues/:league_id/teams/leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<TeamWithPlayers>>, ApiError> {
    let teams = PostgresTeamRepository::new(state.pool.clone())
        .list_by_points(league_id)
        .await?;
    let players = PostgresPlayerRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    Ok(Json(attach_players(teams, players)))
}
