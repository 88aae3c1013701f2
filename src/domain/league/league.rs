use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{LeagueSettings, LeagueStatus};
use crate::domain::errors::{DomainError, DomainResult};

/// League aggregate root.
///
/// A league owns its teams, players, scoring configuration, and draft
/// lifecycle. The creator becomes the owner and the first admin.
///
/// # Invariants
/// - Name is trimmed, 3..=100 characters.
/// - New leagues start in `setup` with the draft not completed.
/// - Settings honor the ranges enforced by [`LeagueSettings`].
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub admins: Vec<Uuid>,
    #[sqlx(flatten)]
    pub settings: LeagueSettings,
    pub draft_completed: bool,
    pub status: LeagueStatus,
    pub created_at: DateTime<Utc>,
}

impl League {
    /// Creates a new league in `setup` status with the creator as owner and
    /// sole admin.
    pub fn new(name: String, owner_id: Uuid, settings: LeagueSettings) -> DomainResult<Self> {
        let name = validate_league_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            owner_id,
            admins: vec![owner_id],
            settings,
            draft_completed: false,
            status: LeagueStatus::Setup,
            created_at: Utc::now(),
        })
    }

    /// Whether the user may perform admin actions on this league.
    pub fn is_admin(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id || self.admins.contains(&user_id)
    }

    /// Errors with `Forbidden` unless the user is an admin.
    pub fn require_admin(&self, user_id: Uuid) -> DomainResult<()> {
        if self.is_admin(user_id) {
            Ok(())
        } else {
            Err(DomainError::forbidden("Admin access required"))
        }
    }
}

/// Validates and normalizes a league name: trimmed, 3..=100 characters.
pub fn validate_league_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.len() < 3 {
        return Err(DomainError::validation(
            "League name must be at least 3 characters",
        ));
    }
    if trimmed.len() > 100 {
        return Err(DomainError::validation(
            "League name must be less than 100 characters",
        ));
    }
    Ok(trimmed.to_string())
}
