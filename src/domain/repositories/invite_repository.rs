use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::invite::Invite;

/// Repository contract for invites.
#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Create an invite; conflicts if the code is already taken.
    async fn create(&self, invite: &Invite) -> DomainResult<()>;

    /// Look up an invite by its (normalized) code.
    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Invite>>;

    /// All invites for a league, newest first.
    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Invite>>;

    async fn increment_uses(&self, invite_id: Uuid) -> DomainResult<()>;
}
