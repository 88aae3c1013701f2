use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::load_league;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::api::state::AppState;
use crate::domain::errors::DomainError;
use crate::domain::repositories::WeekRepository;
use crate::domain::week::{validate_week_number, Week};
use crate::infrastructure::repositories::PostgresWeekRepository;

/// Request body for creating a week
#[derive(Debug, Deserialize)]
pub struct CreateWeekRequest {
    pub week_number: i32,
    #[serde(default)]
    pub episode_date: Option<NaiveDate>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Request body for bulk week creation
#[derive(Debug, Deserialize)]
pub struct BulkWeeksRequest {
    pub weeks: Vec<CreateWeekRequest>,
}

/// Response from bulk week creation
#[derive(Debug, Serialize)]
pub struct BulkWeeksResponse {
    pub message: String,
    pub weeks: Vec<Week>,
}

/// All weeks in the league
///
/// GET /api/leagues/:league_id/weeks
pub async fn list_weeks(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<Week>>, ApiError> {
    let weeks = PostgresWeekRepository::new(state.pool.clone())
        .list_by_league(league_id)
        .await?;

    Ok(Json(weeks))
}

/// Create a week
///
/// POST /api/leagues/:league_id/weeks
pub async fn create_week(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<CreateWeekRequest>,
) -> Result<(StatusCode, Json<Week>), ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let week_repo = PostgresWeekRepository::new(state.pool.clone());

    let week_number = validate_week_number(req.week_number)?;
    if week_repo
        .find_by_number(league_id, week_number)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict("Week already exists").into());
    }

    let week = Week::new(league_id, week_number, req.episode_date, req.title)?;
    week_repo.create(&week).await?;

    Ok((StatusCode::CREATED, Json(week)))
}

/// Bulk create weeks
///
/// POST /api/leagues/:league_id/weeks/bulk
pub async fn bulk_create_weeks(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(league_id): Path<Uuid>,
    Json(req): Json<BulkWeeksRequest>,
) -> Result<(StatusCode, Json<BulkWeeksResponse>), ApiError> {
    if req.weeks.is_empty() {
        return Err(ApiError::bad_request("Weeks array required"));
    }

    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let weeks = req
        .weeks
        .into_iter()
        .map(|w| Week::new(league_id, w.week_number, w.episode_date, w.title))
        .collect::<Result<Vec<_>, _>>()?;

    PostgresWeekRepository::new(state.pool.clone())
        .create_many(&weeks)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BulkWeeksResponse {
            message: format!("{} weeks created", weeks.len()),
            weeks,
        }),
    ))
}

/// Finalize weekly scoring and close the week
///
/// PATCH /api/leagues/:league_id/weeks/:week/finalize
pub async fn finalize_week(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path((league_id, week)): Path<(Uuid, i32)>,
) -> Result<Json<Week>, ApiError> {
    let league = load_league(&state.pool, league_id).await?;
    league.require_admin(user_id)?;

    let week_number = validate_week_number(week)?;
    let week = PostgresWeekRepository::new(state.pool.clone())
        .finalize(league_id, week_number)
        .await?
        .ok_or_else(|| DomainError::not_found("Week"))?;

    Ok(Json(week))
}
