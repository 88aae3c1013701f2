use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// A contestant's standing on the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "player_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    VotedOut,
    Jury,
    Finalist,
    Winner,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        PlayerStatus::Active
    }
}

/// A show contestant available to be drafted within one league.
///
/// `drafted_by` is set exactly once per draft epoch (cleared only by a
/// reset); `pick_number` records the league-wide pick ordinal at that moment
/// and therefore also encodes the team's roster order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Player {
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub photo_url: String,
    pub tribe: Option<String>,
    pub status: PlayerStatus,
    pub drafted_by: Option<Uuid>,
    pub pick_number: Option<i32>,
    pub total_points: i32,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(
        league_id: Uuid,
        name: String,
        photo_url: String,
        tribe: Option<String>,
        status: PlayerStatus,
    ) -> DomainResult<Self> {
        let name = validate_player_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            league_id,
            name,
            photo_url,
            tribe,
            status,
            drafted_by: None,
            pick_number: None,
            total_points: 0,
            created_at: Utc::now(),
        })
    }
}

/// Validates and normalizes a contestant name: trimmed, 1..=100 characters.
pub fn validate_player_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Player name cannot be empty"));
    }
    if trimmed.len() > 100 {
        return Err(DomainError::validation(
            "Player name must be less than 100 characters",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_undrafted() {
        let player = Player::new(
            Uuid::new_v4(),
            "Rupert".to_string(),
            String::new(),
            Some("Drake".to_string()),
            PlayerStatus::Active,
        )
        .unwrap();

        assert!(player.drafted_by.is_none());
        assert!(player.pick_number.is_none());
        assert_eq!(player.total_points, 0);
    }

    #[test]
    fn empty_name_rejected() {
        let result = Player::new(
            Uuid::new_v4(),
            "   ".to_string(),
            String::new(),
            None,
            PlayerStatus::Active,
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn status_serde_uses_snake_case() {
        let status: PlayerStatus = serde_json::from_str("\"voted_out\"").unwrap();
        assert_eq!(status, PlayerStatus::VotedOut);
        assert_eq!(
            serde_json::to_string(&PlayerStatus::VotedOut).unwrap(),
            "\"voted_out\""
        );
    }

    #[test]
    fn default_status_is_active() {
        assert_eq!(PlayerStatus::default(), PlayerStatus::Active);
    }
}
