use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use crate::domain::errors::{DomainError, DomainResult};

/// Lifecycle status of a league.
///
/// `setup` is the only status from which a draft may start; `draft` is the
/// only status in which picks are accepted. Admins move leagues between
/// statuses explicitly via the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "league_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeagueStatus {
    Setup,
    Draft,
    Active,
    Final,
}

impl std::fmt::Display for LeagueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueStatus::Setup => write!(f, "setup"),
            LeagueStatus::Draft => write!(f, "draft"),
            LeagueStatus::Active => write!(f, "active"),
            LeagueStatus::Final => write!(f, "final"),
        }
    }
}

/// Draft configuration carried by every league.
///
/// `pick_seconds` is stored and range-checked but nothing in the server
/// enforces it; turn forfeiture on timeout is a client concern at most.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DraftSettings {
    pub pick_seconds: i32,
    pub randomized_order: bool,
}

/// Invite-permission flags. Stored configuration only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InviteSettings {
    pub allow_team_invites: bool,
    pub allow_league_invites: bool,
}

/// Full league settings block, flattened onto the `leagues` row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeagueSettings {
    pub show: String,
    pub season_label: String,
    pub max_teams: i32,
    pub members_per_team: i32,
    #[sqlx(flatten)]
    pub draft: DraftSettings,
    #[sqlx(flatten)]
    pub invites: InviteSettings,
    pub scoring_rules: Json<HashMap<String, i32>>,
}

/// Partial settings payload accepted by league creation and the settings
/// PATCH endpoint. Absent fields keep their previous (or default) value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSettingsPatch {
    pub show: Option<String>,
    pub season_label: Option<String>,
    pub max_teams: Option<i32>,
    pub members_per_team: Option<i32>,
    pub draft: Option<DraftSettingsPatch>,
    pub invites: Option<InviteSettingsPatch>,
    pub scoring_rules: Option<HashMap<String, i32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftSettingsPatch {
    pub pick_seconds: Option<i32>,
    pub randomized_order: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteSettingsPatch {
    pub allow_team_invites: Option<bool>,
    pub allow_league_invites: Option<bool>,
}

impl LeagueSettings {
    /// Builds a settings block from defaults plus an optional patch.
    ///
    /// Defaults: show "Survivor", season "S1", 8 teams, 2 members per team,
    /// 60-second picks with randomized order, both invite kinds allowed,
    /// empty scoring rules.
    pub fn with_defaults(patch: LeagueSettingsPatch) -> DomainResult<Self> {
        let mut settings = Self {
            show: "Survivor".to_string(),
            season_label: "S1".to_string(),
            max_teams: 8,
            members_per_team: 2,
            draft: DraftSettings {
                pick_seconds: 60,
                randomized_order: true,
            },
            invites: InviteSettings {
                allow_team_invites: true,
                allow_league_invites: true,
            },
            scoring_rules: Json(HashMap::new()),
        };
        settings.apply(patch)?;
        Ok(settings)
    }

    /// Applies a partial update, validating each supplied field.
    pub fn apply(&mut self, patch: LeagueSettingsPatch) -> DomainResult<()> {
        if let Some(show) = patch.show {
            self.show = show;
        }
        if let Some(label) = patch.season_label {
            self.season_label = label;
        }
        if let Some(max_teams) = patch.max_teams {
            self.max_teams = validate_range(max_teams, 2, 20, "Max teams")?;
        }
        if let Some(members) = patch.members_per_team {
            self.members_per_team = validate_range(members, 1, 10, "Members per team")?;
        }
        if let Some(draft) = patch.draft {
            if let Some(seconds) = draft.pick_seconds {
                self.draft.pick_seconds = validate_range(seconds, 30, 600, "Pick seconds")?;
            }
            if let Some(randomized) = draft.randomized_order {
                self.draft.randomized_order = randomized;
            }
        }
        if let Some(invites) = patch.invites {
            if let Some(allow) = invites.allow_team_invites {
                self.invites.allow_team_invites = allow;
            }
            if let Some(allow) = invites.allow_league_invites {
                self.invites.allow_league_invites = allow;
            }
        }
        if let Some(rules) = patch.scoring_rules {
            self.scoring_rules = Json(validate_scoring_rules(rules)?);
        }
        Ok(())
    }
}

/// Range check shared by the numeric settings fields.
pub fn validate_range(value: i32, min: i32, max: i32, field: &str) -> DomainResult<i32> {
    if value < min {
        return Err(DomainError::validation(format!(
            "{field} must be at least {min}"
        )));
    }
    if value > max {
        return Err(DomainError::validation(format!(
            "{field} must be at most {max}"
        )));
    }
    Ok(value)
}

/// Validates scoring rules: non-empty keys normalized to uppercase, point
/// values within -100..=100.
pub fn validate_scoring_rules(
    rules: HashMap<String, i32>,
) -> DomainResult<HashMap<String, i32>> {
    let mut validated = HashMap::with_capacity(rules.len());
    for (key, points) in rules {
        if key.trim().is_empty() {
            return Err(DomainError::validation(
                "Scoring rule keys must be non-empty strings",
            ));
        }
        let points = validate_range(points, -100, 100, &format!("Points for {key}"))?;
        validated.insert(key.to_uppercase(), points);
    }
    Ok(validated)
}
