use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::load_league;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::errors::DomainError;
use crate::domain::invite::{Invite, InviteCode, InviteType};
use crate::domain::league::value_objects::validate_range;
use crate::domain::repositories::{InviteRepository, TeamRepository};
use crate::domain::team::Team;
use crate::infrastructure::repositories::{PostgresInviteRepository, PostgresTeamRepository};

/// Request body for creating an invite
#[derive(Debug, Deserialize)]
pub struct CreateInviteRequest {
    pub invite_type: InviteType,
    #[serde(default)]
    pub team_id: Option<Uuid>,
    #[serde(default)]
    pub multi_use: Option<bool>,
    #[serde(default)]
    pub max_uses: Option<i32>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request body for redeeming an invite code
#[derive(Debug, Deserialize)]
pub struct RedeemInviteRequest {
    pub code: String,
    #[serde(default)]
    pub team_name: Option<String>,
}

/// Response from redeeming an invite
#[derive(Debug, Serialize)]
pub struct RedeemInviteResponse {
    pub message: String,
    pub team: Team,
    pub league_id: Uuid,
}

/// Create an invite
///
/// POST /api/leagues/:league_id/invites
pub async fn create_invite(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<Invite>), ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let team_id = match req.invite_type {
        InviteType::Team => {
            let team_id = req
                .team_id
                .ok_or_else(|| DomainError::validation("Team ID required for team invites"))?;
            PostgresTeamRepository::new(state.pool.clone())
                .find_by_id(league_id, team_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Team"))?;
            Some(team_id)
        }
        InviteType::League => None,
    };

    let max_uses = req
        .max_uses
        .map(|n| validate_range(n, 1, 1000, "Max uses"))
        .transpose()?;

    let invite_repo = PostgresInviteRepository::new(state.pool.clone());

    // Regenerate on the rare code collision.
    let mut code = None;
    for _ in 0..10 {
        let candidate = InviteCode::generate(&mut rand::thread_rng());
        if invite_repo.find_by_code(candidate.as_str()).await?.is_none() {
            code = Some(candidate);
            break;
        }
    }
    let code =
        code.ok_or_else(|| ApiError::internal_server_error("Failed to generate unique code"))?;

    let invite = Invite {
        id: Uuid::new_v4(),
        league_id,
        invite_type: req.invite_type,
        team_id,
        code: code.as_str().to_string(),
        multi_use: req.multi_use.unwrap_or(true),
        uses: 0,
        max_uses,
        expires_at: req.expires_at,
        created_by: user_id,
        created_at: Utc::now(),
    };

    invite_repo.create(&invite).await?;

    Ok((StatusCode::CREATED, Json(invite)))
}

/// Redeem an invite code, creating or joining a team
///
/// POST /api/invites/redeem
pub async fn redeem_invite(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<RedeemInviteRequest>,
) -> Result<Json<RedeemInviteResponse>, ApiError> {
    let code = InviteCode::parse(&req.code)?;

    let invite_repo = PostgresInviteRepository::new(state.pool.clone());
    let invite = invite_repo
        .find_by_code(code.as_str())
        .await?
        .ok_or_else(|| DomainError::not_found("Invite code"))?;

    invite.check_redeemable(Utc::now())?;

    let team_repo = PostgresTeamRepository::new(state.pool.clone());
    if team_repo
        .find_by_member(invite.league_id, user_id)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict("You already belong to a team in this league").into());
    }

    let team = match invite.invite_type {
        InviteType::League => {
            let team_name = req
                .team_name
                .ok_or_else(|| DomainError::validation("Team name required for league invites"))?;

            let league = load_league(&state.pool, invite.league_id).await?;
            let team = Team::new(
                invite.league_id,
                team_name,
                user_id,
                league.settings.members_per_team,
            )?;
            team_repo.create(&team).await?;
            team
        }
        InviteType::Team => {
            let team_id = invite
                .team_id
                .ok_or_else(|| DomainError::not_found("Team"))?;
            let mut team = team_repo
                .find_by_id(invite.league_id, team_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Team"))?;

            if team.is_full() {
                return Err(DomainError::conflict("Team is full").into());
            }

            team_repo.add_member(team.id, user_id).await?;
            team.members.push(user_id);
            team
        }
    };

    invite_repo.increment_uses(invite.id).await?;

    Ok(Json(RedeemInviteResponse {
        message: "Invite redeemed successfully".to_string(),
        team,
        league_id: invite.league_id,
    }))
}

/// All invites for a league
///
/// GET /api/leagues/:league_id/invites
pub async fn list_invites(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<Invite>>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let invites = PostgresInviteRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    Ok(Json(invites))
}
