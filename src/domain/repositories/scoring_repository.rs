use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::scoring::ScoringEvent;

/// Repository contract for scoring events.
///
/// Adding or deleting an event also adjusts the player's (and, when the
/// player is drafted, the team's) point totals; implementations must apply
/// both sides in one transaction.
#[async_trait]
pub trait ScoringRepository: Send + Sync {
    async fn add_event(&self, event: &ScoringEvent) -> DomainResult<()>;

    async fn find_by_id(
        &self,
        league_id: Uuid,
        event_id: Uuid,
    ) -> DomainResult<Option<ScoringEvent>>;

    /// Events for one week, oldest first.
    async fn list_by_week(&self, league_id: Uuid, week: i32) -> DomainResult<Vec<ScoringEvent>>;

    /// Removes the event and reverses its points.
    async fn delete_event(&self, event: &ScoringEvent) -> DomainResult<()>;
}
