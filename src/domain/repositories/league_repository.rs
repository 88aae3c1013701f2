use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::league::{League, LeagueSettings, LeagueStatus};

/// Repository contract for leagues, including the two draft-epoch bulk
/// transitions that must be atomic across tables.
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn create(&self, league: &League) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<League>>;

    /// Leagues the user belongs to as owner, admin, or team member; newest
    /// first.
    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<League>>;

    async fn update_settings(&self, id: Uuid, settings: &LeagueSettings) -> DomainResult<()>;

    async fn set_status(&self, id: Uuid, status: LeagueStatus) -> DomainResult<()>;

    /// Applies the draft-order permutation and flips the league to `draft`
    /// in a single transaction. `assignments` pairs each team id with its
    /// 1-based order.
    async fn start_draft(&self, id: Uuid, assignments: &[(Uuid, i32)]) -> DomainResult<()>;

    /// Clears the whole draft epoch in a single transaction: every player's
    /// `drafted_by`/`pick_number`, every team's `draft_order`, the league's
    /// status (back to `setup`) and `draft_completed` flag.
    async fn reset_draft(&self, id: Uuid) -> DomainResult<()>;
}
