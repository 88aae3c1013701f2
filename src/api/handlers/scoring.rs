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
use crate::domain::repositories::{PlayerRepository, ScoringRepository};
use crate::domain::scoring::ScoringEvent;
use crate::domain::week::validate_week_number;
use crate::infrastructure::repositories::{PostgresPlayerRepository, PostgresScoringRepository};

/// Request body for adding a scoring event
#[derive(Debug, Deserialize)]
pub struct AddEventRequest {
    pub week: i32,
    pub player_id: Uuid,
    pub event_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response from adding a scoring event
#[derive(Debug, Serialize)]
pub struct AddEventResponse {
    pub message: String,
    pub event: ScoringEvent,
}

/// Add a scoring event and adjust point totals
///
/// POST /api/leagues/:league_id/scoring/add
pub async fn add_event(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<AddEventRequest>,
) -> Result<(StatusCode, Json<AddEventResponse>), ApiError> {
    let week = validate_week_number(req.week)?;

    if req.event_type.trim().is_empty() {
        return Err(ApiError::bad_request("Event type required"));
    }

    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    // Point values come from the league's scoring rules at event time.
    let event_type = req.event_type.to_uppercase();
    let points = *league
        .settings
        .scoring_rules
        .0
        .get(&event_type)
        .ok_or_else(|| {
            DomainError::validation(format!(
                "Event type '{}' not found in scoring rules",
                req.event_type
            ))
        })?;

    let player = PostgresPlayerRepository::new(state.pool.clone())
        .find_by_id(league_id, req.player_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Player"))?;

    let event = ScoringEvent::new(
        league_id,
        week,
        player.id,
        event_type,
        req.description.unwrap_or_default(),
        points,
    );

    PostgresScoringRepository::new(state.pool.clone())
        .add_event(&event)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddEventResponse {
            message: "Scoring event added".to_string(),
            event,
        }),
    ))
}

/// Scoring events for a week
///
/// GET /api/leagues/:league_id/scoring/week/:week
pub async fn week_events(
    State(state): State<AppState>,
    Path((league_id, week)): Path<(Uuid, i32)>,
) -> Result<Json<Vec<ScoringEvent>>, ApiError> {
    let week = validate_week_number(week)?;

    let events = PostgresScoringRepository::new(state.pool.clone())
        .list_by_week(league_id, week)
        .await?;

    Ok(Json(events))
}

/// Delete a scoring event, reversing its points
///
/// DELETE /api/leagues/:league_id/scoring/:event_id
pub async fn delete_event(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path((league_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let scoring_repo = PostgresScoringRepository::new(state.pool.clone());
    let event = scoring_repo
        .find_by_id(league_id, event_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Scoring event"))?;

    scoring_repo.delete_event(&event).await?;

    Ok(Json(serde_json::json!({
        "message": "Scoring event deleted"
    })))
}
