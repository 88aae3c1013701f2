use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::player::Player;

/// Repository contract for contestants.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Bulk insert (roster import).
    async fn create_many(&self, players: &[Player]) -> DomainResult<()>;

    /// All contestants in the league, by name.
    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Player>>;

    /// Find a contestant by id, scoped to its league.
    async fn find_by_id(&self, league_id: Uuid, player_id: Uuid) -> DomainResult<Option<Player>>;

    /// Persist name/photo/tribe/status edits.
    async fn update(&self, player: &Player) -> DomainResult<()>;

    /// Delete; `false` when the player was not found.
    async fn delete(&self, league_id: Uuid, player_id: Uuid) -> DomainResult<bool>;

    async fn count_total(&self, league_id: Uuid) -> DomainResult<i64>;

    async fn count_drafted(&self, league_id: Uuid) -> DomainResult<i64>;

    /// Marks the player drafted by `team_id` at `pick_number`, conditional on
    /// the player still being undrafted. Returns `false` (no mutation) when
    /// another pick got there first; this is the database-level half of the
    /// at-most-once guarantee.
    async fn draft_player(
        &self,
        player_id: Uuid,
        team_id: Uuid,
        pick_number: i32,
    ) -> DomainResult<bool>;
}
