use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One scoring moment for a contestant in a given week.
///
/// The point value is copied out of the league's scoring rules at creation
/// time, so later rule edits never rewrite history. Player and team point
/// totals are adjusted in the same transaction that inserts or deletes the
/// event.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ScoringEvent {
    pub id: Uuid,
    pub league_id: Uuid,
    pub week: i32,
    pub player_id: Uuid,
    pub event_type: String,
    pub description: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl ScoringEvent {
    pub fn new(
        league_id: Uuid,
        week: i32,
        player_id: Uuid,
        event_type: String,
        description: String,
        points: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            league_id,
            week,
            player_id,
            event_type,
            description,
            points,
            created_at: Utc::now(),
        }
    }
}
