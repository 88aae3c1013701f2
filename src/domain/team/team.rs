use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// A fantasy team inside a league.
///
/// `draft_order` is null until a draft starts, then holds this team's 1-based
/// slot in the snake order for the current epoch. `members` are the user ids
/// allowed to pick for the team. The drafted roster itself lives on players
/// (`drafted_by` + `pick_number`), keyed back to the team.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub members: Vec<Uuid>,
    pub max_members: i32,
    pub draft_order: Option<i32>,
    pub total_points: i32,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a team with the given creator as its first member.
    pub fn new(
        league_id: Uuid,
        name: String,
        creator: Uuid,
        max_members: i32,
    ) -> DomainResult<Self> {
        let name = validate_team_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            league_id,
            name,
            members: vec![creator],
            max_members,
            draft_order: None,
            total_points: 0,
            created_at: Utc::now(),
        })
    }

    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.contains(&user_id)
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_members as usize
    }
}

/// Validates and normalizes a team name: trimmed, 2..=50 characters.
pub fn validate_team_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.len() < 2 {
        return Err(DomainError::validation(
            "Team name must be at least 2 characters",
        ));
    }
    if trimmed.len() > 50 {
        return Err(DomainError::validation(
            "Team name must be less than 50 characters",
        ));
    }
    Ok(trimmed.to_string())
}
