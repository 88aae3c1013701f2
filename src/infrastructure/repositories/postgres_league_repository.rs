use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::league::{League, LeagueSettings, LeagueStatus};
use crate::domain::repositories::LeagueRepository;

/// PostgreSQL implementation of [`LeagueRepository`].
pub struct PostgresLeagueRepository {
    pool: PgPool,
}

impl PostgresLeagueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueRepository for PostgresLeagueRepository {
    async fn create(&self, league: &League) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO leagues (
                id, name, owner_id, admins, show, season_label,
                max_teams, members_per_team, pick_seconds, randomized_order,
                allow_team_invites, allow_league_invites, scoring_rules,
                draft_completed, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(league.id)
        .bind(&league.name)
        .bind(league.owner_id)
        .bind(&league.admins)
        .bind(&league.settings.show)
        .bind(&league.settings.season_label)
        .bind(league.settings.max_teams)
        .bind(league.settings.members_per_team)
        .bind(league.settings.draft.pick_seconds)
        .bind(league.settings.draft.randomized_order)
        .bind(league.settings.invites.allow_team_invites)
        .bind(league.settings.invites.allow_league_invites)
        .bind(&league.settings.scoring_rules)
        .bind(league.draft_completed)
        .bind(league.status)
        .bind(league.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<League>> {
        let league = sqlx::query_as::<_, League>("SELECT * FROM leagues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(league)
    }

    async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>(
            r#"
            SELECT DISTINCT l.*
            FROM leagues l
            LEFT JOIN teams t ON t.league_id = l.id
            WHERE l.owner_id = $1
               OR $1 = ANY (l.admins)
               OR $1 = ANY (t.members)
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leagues)
    }

    async fn update_settings(&self, id: Uuid, settings: &LeagueSettings) -> DomainResult<()> {
        sqlx::query(
            r#"
            UPDATE leagues
            SET show = $2,
                season_label = $3,
                max_teams = $4,
                members_per_team = $5,
                pick_seconds = $6,
                randomized_order = $7,
                allow_team_invites = $8,
                allow_league_invites = $9,
                scoring_rules = $10
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&settings.show)
        .bind(&settings.season_label)
        .bind(settings.max_teams)
        .bind(settings.members_per_team)
        .bind(settings.draft.pick_seconds)
        .bind(settings.draft.randomized_order)
        .bind(settings.invites.allow_team_invites)
        .bind(settings.invites.allow_league_invites)
        .bind(&settings.scoring_rules)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_status(&self, id: Uuid, status: LeagueStatus) -> DomainResult<()> {
        sqlx::query("UPDATE leagues SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn start_draft(&self, id: Uuid, assignments: &[(Uuid, i32)]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        for (team_id, order) in assignments {
            sqlx::query("UPDATE teams SET draft_order = $2 WHERE id = $1 AND league_id = $3")
                .bind(team_id)
                .bind(order)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("UPDATE leagues SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(LeagueStatus::Draft)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn reset_draft(&self, id: Uuid) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE players SET drafted_by = NULL, pick_number = NULL WHERE league_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE teams SET draft_order = NULL WHERE league_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE leagues SET status = $2, draft_completed = FALSE WHERE id = $1")
            .bind(id)
            .bind(LeagueStatus::Setup)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
