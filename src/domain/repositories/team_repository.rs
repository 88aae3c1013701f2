use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::team::Team;

/// Repository contract for teams.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn create(&self, team: &Team) -> DomainResult<()>;

    /// Find a team by id, scoped to its league.
    async fn find_by_id(&self, league_id: Uuid, team_id: Uuid) -> DomainResult<Option<Team>>;

    /// All teams in creation order (the order draft slots are dealt to when
    /// randomization is off).
    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Team>>;

    /// All teams by ascending draft order; unassigned teams sort last.
    async fn list_by_draft_order(&self, league_id: Uuid) -> DomainResult<Vec<Team>>;

    /// All teams by descending total points (the leaderboard).
    async fn list_by_points(&self, league_id: Uuid) -> DomainResult<Vec<Team>>;

    /// The team the user already belongs to in this league, if any.
    async fn find_by_member(&self, league_id: Uuid, user_id: Uuid) -> DomainResult<Option<Team>>;

    async fn count_by_league(&self, league_id: Uuid) -> DomainResult<i64>;

    async fn add_member(&self, team_id: Uuid, user_id: Uuid) -> DomainResult<()>;
}
