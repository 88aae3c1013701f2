use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::is_unique_violation;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::invite::Invite;
use crate::domain::repositories::InviteRepository;

/// PostgreSQL implementation of [`InviteRepository`].
pub struct PostgresInviteRepository {
    pool: PgPool,
}

impl PostgresInviteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PostgresInviteRepository {
    async fn create(&self, invite: &Invite) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO invites (
                id, league_id, invite_type, team_id, code, multi_use,
                uses, max_uses, expires_at, created_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(invite.id)
        .bind(invite.league_id)
        .bind(invite.invite_type)
        .bind(invite.team_id)
        .bind(&invite.code)
        .bind(invite.multi_use)
        .bind(invite.uses)
        .bind(invite.max_uses)
        .bind(invite.expires_at)
        .bind(invite.created_by)
        .bind(invite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                DomainError::conflict("Invite code already in use")
            } else {
                DomainError::from(err)
            }
        })?;

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Invite>> {
        let invite = sqlx::query_as::<_, Invite>("SELECT * FROM invites WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(invite)
    }

    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Invite>> {
        let invites = sqlx::query_as::<_, Invite>(
            "SELECT * FROM invites WHERE league_id = $1 ORDER BY created_at DESC",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(invites)
    }

    async fn increment_uses(&self, invite_id: Uuid) -> DomainResult<()> {
        sqlx::query("UPDATE invites SET uses = uses + 1 WHERE id = $1")
            .bind(invite_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
