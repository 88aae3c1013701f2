use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::week::Week;

/// Repository contract for season weeks.
#[async_trait]
pub trait WeekRepository: Send + Sync {
    async fn create(&self, week: &Week) -> DomainResult<()>;

    /// Bulk insert; fails on any duplicate week number.
    async fn create_many(&self, weeks: &[Week]) -> DomainResult<()>;

    /// All weeks in the league by week number.
    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Week>>;

    async fn find_by_number(&self, league_id: Uuid, week_number: i32)
        -> DomainResult<Option<Week>>;

    /// Marks scoring finalized and closes the week; returns the updated row,
    /// or `None` when the week does not exist.
    async fn finalize(&self, league_id: Uuid, week_number: i32) -> DomainResult<Option<Week>>;
}
