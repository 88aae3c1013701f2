use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{attach_players, load_league, TeamWithPlayers};
use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::draft::{current_pick_index, draft_order_sequence, validate_pick};
use crate::domain::errors::DomainError;
use crate::domain::league::{League, LeagueStatus};
use crate::domain::player::Player;
use crate::domain::repositories::{LeagueRepository, PlayerRepository, TeamRepository};
use crate::domain::team::Team;
use crate::infrastructure::repositories::{
    PostgresLeagueRepository, PostgresPlayerRepository, PostgresTeamRepository,
};

/// Request body for a pick submission
#[derive(Debug, Deserialize)]
pub struct PickRequest {
    pub player_id: Uuid,
    pub team_id: Uuid,
}

/// Response from starting a draft
#[derive(Debug, Serialize)]
pub struct StartDraftResponse {
    pub message: String,
    pub draft_order: Vec<i32>,
    pub league: League,
}

/// Response from a successful pick
#[derive(Debug, Serialize)]
pub struct PickResponse {
    pub message: String,
    pub player: Player,
    pub team: Team,
}

/// Draft progress report
#[derive(Debug, Serialize)]
pub struct DraftStatusResponse {
    pub status: LeagueStatus,
    pub total_players: i64,
    pub drafted_players: i64,
    pub current_pick_team: Option<TeamWithPlayers>,
    pub teams: Vec<TeamWithPlayers>,
}

/// Initialize the draft: assign (optionally shuffled) order and flip the
/// league to `draft`
///
/// POST /api/leagues/:league_id/draft/start
pub async fn start_draft(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
) -> Result<Json<StartDraftResponse>, ApiError> {
    let lock = state.draft_locks.for_league(league_id);
    let _guard = lock.lock().await;

    let mut league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    if league.status != LeagueStatus::Setup {
        return Err(
            DomainError::invalid_state("Draft can only be started from setup status").into(),
        );
    }

    let teams = PostgresTeamRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    if teams.is_empty() {
        return Err(
            DomainError::validation("No teams found. Create teams before starting draft").into(),
        );
    }

    let draft_order = draft_order_sequence(
        teams.len(),
        league.settings.draft.randomized_order,
        &mut rand::thread_rng(),
    );

    let assignments: Vec<(Uuid, i32)> = teams
        .iter()
        .zip(draft_order.iter())
        .map(|(team, order)| (team.id, *order))
        .collect();

    PostgresLeagueRepository::new(state.pool.clone())
        .start_draft(league_id, &assignments)
        .await?;

    league.status = LeagueStatus::Draft;

    Ok(Json(StartDraftResponse {
        message: "Draft started".to_string(),
        draft_order,
        league,
    }))
}

/// Submit a pick: validate the turn, then atomically claim the player
///
/// POST /api/leagues/:league_id/draft/pick
pub async fn submit_pick(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<PickRequest>,
) -> Result<Json<PickResponse>, ApiError> {
    // Serialize the read-validate-write sequence per league so two racing
    // picks cannot both pass turn validation against the same drafted count.
    let lock = state.draft_locks.for_league(league_id);
    let _guard = lock.lock().await;

    let league = load_league(&state.pool, league_id).await?;

    if league.status != LeagueStatus::Draft {
        return Err(DomainError::invalid_state("League is not in draft mode").into());
    }

    let player_repo = PostgresPlayerRepository::new(state.pool.clone());
    let mut player = player_repo
        .find_by_id(league_id, req.player_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Player"))?;

    let team_repo = PostgresTeamRepository::new(state.pool.clone());
    let team = team_repo
        .find_by_id(league_id, req.team_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Team"))?;

    let ordered_teams = team_repo.list_by_draft_order(league_id).await?;
    let drafted_count = player_repo.count_drafted(league_id).await?;

    validate_pick(
        &league,
        &player,
        &team,
        user_id,
        &ordered_teams,
        drafted_count as u64,
    )?;

    let pick_number = drafted_count as i32 + 1;
    let claimed = player_repo
        .draft_player(player.id, team.id, pick_number)
        .await?;
    if !claimed {
        return Err(DomainError::conflict("Player already drafted").into());
    }

    player.drafted_by = Some(team.id);
    player.pick_number = Some(pick_number);

    Ok(Json(PickResponse {
        message: "Player drafted successfully".to_string(),
        player,
        team,
    }))
}

/// Clear the whole draft epoch
///
/// POST /api/leagues/:league_id/draft/reset
pub async fn reset_draft(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let lock = state.draft_locks.for_league(league_id);
    let _guard = lock.lock().await;

    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    PostgresLeagueRepository::new(state.pool.clone())
        .reset_draft(league_id)
        .await?;

    Ok(Json(serde_json::json!({
        "message": "Draft reset successfully"
    })))
}

/// Draft progress: counts, team rosters, and whose turn it is
///
/// GET /api/leagues/:league_id/draft/status
pub async fn draft_status(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<DraftStatusResponse>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;

    let teams = PostgresTeamRepository::new(state.pool.clone())
        .list_by_draft_order(league_id)
        .await?;
    let players = PostgresPlayerRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    let total_players = players.len() as i64;
    let drafted_players = players.iter().filter(|p| p.drafted_by.is_some()).count() as i64;

    let current_index = if league.status == LeagueStatus::Draft
        && drafted_players < total_players
        && !teams.is_empty()
    {
        Some(current_pick_index(drafted_players as u64, teams.len()))
    } else {
        None
    };

    // attach_players preserves the draft ordering of `teams`.
    let teams = attach_players(teams, players);
    let current_pick_team = current_index.map(|index| {
        let entry = &teams[index];
        TeamWithPlayers {
            team: entry.team.clone(),
            players: entry.players.clone(),
        }
    });

    Ok(Json(DraftStatusResponse {
        status: league.status,
        total_players,
        drafted_players,
        current_pick_team,
        teams,
    }))
}
