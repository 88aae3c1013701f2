// Request handlers, one module per resource.

pub mod auth;
pub mod draft;
pub mod invites;
pub mod leagues;
pub mod players;
pub mod scoring;
pub mod teams;
pub mod weeks;

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::league::League;
use crate::domain::player::Player;
use crate::domain::repositories::LeagueRepository;
use crate::domain::team::Team;
use crate::infrastructure::repositories::PostgresLeagueRepository;

/// A team with its drafted roster attached, in pick order.
#[derive(Debug, Serialize)]
pub struct TeamWithPlayers {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<Player>,
}

/// Loads a league or fails with `NotFound`.
pub(crate) async fn load_league(pool: &PgPool, league_id: Uuid) -> DomainResult<League> {
    PostgresLeagueRepository::new(pool.clone())
        .find_by_id(league_id)
        .await?
        .ok_or_else(|| DomainError::not_found("League"))
}

/// Groups players onto their drafting teams, each roster sorted by pick
/// number (the order the picks were made).
pub(crate) fn attach_players(teams: Vec<Team>, players: Vec<Player>) -> Vec<TeamWithPlayers> {
    let mut by_team: HashMap<Uuid, Vec<Player>> = HashMap::new();
    for player in players {
        if let Some(team_id) = player.drafted_by {
            by_team.entry(team_id).or_default().push(player);
        }
    }

    teams
        .into_iter()
        .map(|team| {
            let mut players = by_team.remove(&team.id).unwrap_or_default();
            players.sort_by_key(|p| p.pick_number);
            TeamWithPlayers { team, players }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::PlayerStatus;
    use chrono::Utc;

    fn team(league_id: Uuid) -> Team {
        Team::new(league_id, "Test Team".to_string(), Uuid::new_v4(), 2).unwrap()
    }

    fn drafted(league_id: Uuid, team_id: Uuid, pick: i32, name: &str) -> Player {
        Player {
            id: Uuid::new_v4(),
            league_id,
            name: name.to_string(),
            photo_url: String::new(),
            tribe: None,
            status: PlayerStatus::Active,
            drafted_by: Some(team_id),
            pick_number: Some(pick),
            total_points: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn rosters_come_back_in_pick_order() {
        let league_id = Uuid::new_v4();
        let a = team(league_id);
        let b = team(league_id);

        // Out-of-order input; snake picks 1/4 went to team a, 2/3 to team b.
        let players = vec![
            drafted(league_id, a.id, 4, "Fourth"),
            drafted(league_id, b.id, 2, "Second"),
            drafted(league_id, a.id, 1, "First"),
            drafted(league_id, b.id, 3, "Third"),
        ];

        let result = attach_players(vec![a, b], players);
        let names: Vec<&str> = result[0].players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Fourth"]);
        let names: Vec<&str> = result[1].players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Second", "Third"]);
    }

    #[test]
    fn undrafted_players_are_left_out() {
        let league_id = Uuid::new_v4();
        let a = team(league_id);
        let mut free_agent = drafted(league_id, a.id, 1, "Undrafted");
        free_agent.drafted_by = None;
        free_agent.pick_number = None;

        let result = attach_players(vec![a], vec![free_agent]);
        assert!(result[0].players.is_empty());
    }
}
