use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::league::value_objects::validate_range;

/// Whether a week is still accepting scoring events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "week_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeekStatus {
    Open,
    Closed,
}

/// One broadcast episode/week of the season within a league.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Week {
    pub id: Uuid,
    pub league_id: Uuid,
    pub week_number: i32,
    pub episode_date: Option<NaiveDate>,
    pub title: String,
    pub status: WeekStatus,
    pub scoring_finalized: bool,
    pub created_at: DateTime<Utc>,
}

impl Week {
    pub fn new(
        league_id: Uuid,
        week_number: i32,
        episode_date: Option<NaiveDate>,
        title: Option<String>,
    ) -> DomainResult<Self> {
        let week_number = validate_week_number(week_number)?;
        Ok(Self {
            id: Uuid::new_v4(),
            league_id,
            week_number,
            episode_date,
            title: title.unwrap_or_else(|| format!("Week {week_number}")),
            status: WeekStatus::Open,
            scoring_finalized: false,
            created_at: Utc::now(),
        })
    }
}

/// Week numbers run 1..=100.
pub fn validate_week_number(week: i32) -> DomainResult<i32> {
    validate_range(week, 1, 100, "Week number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_week_defaults_title() {
        let week = Week::new(Uuid::new_v4(), 3, None, None).unwrap();
        assert_eq!(week.title, "Week 3");
        assert_eq!(week.status, WeekStatus::Open);
        assert!(!week.scoring_finalized);
    }

    #[test]
    fn explicit_title_kept() {
        let week = Week::new(Uuid::new_v4(), 1, None, Some("Premiere".to_string())).unwrap();
        assert_eq!(week.title, "Premiere");
    }

    #[test]
    fn week_number_bounds() {
        assert!(Week::new(Uuid::new_v4(), 0, None, None).is_err());
        assert!(Week::new(Uuid::new_v4(), 101, None, None).is_err());
        assert!(Week::new(Uuid::new_v4(), 100, None, None).is_ok());
    }
}
