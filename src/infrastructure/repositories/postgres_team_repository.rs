use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of [`TeamRepository`].
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: &Team) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO teams (
                id, league_id, name, members, max_members,
                draft_order, total_points, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(team.id)
        .bind(team.league_id)
        .bind(&team.name)
        .bind(&team.members)
        .bind(team.max_members)
        .bind(team.draft_order)
        .bind(team.total_points)
        .bind(team.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, league_id: Uuid, team_id: Uuid) -> DomainResult<Option<Team>> {
        let team =
            sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1 AND league_id = $2")
                .bind(team_id)
                .bind(league_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(team)
    }

    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE league_id = $1 ORDER BY created_at ASC",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn list_by_draft_order(&self, league_id: Uuid) -> DomainResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT * FROM teams
            WHERE league_id = $1
            ORDER BY draft_order ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn list_by_points(&self, league_id: Uuid) -> DomainResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE league_id = $1 ORDER BY total_points DESC, created_at ASC",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    async fn find_by_member(&self, league_id: Uuid, user_id: Uuid) -> DomainResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE league_id = $1 AND $2 = ANY (members)",
        )
        .bind(league_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    async fn count_by_league(&self, league_id: Uuid) -> DomainResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams WHERE league_id = $1")
            .bind(league_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn add_member(&self, team_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        sqlx::query("UPDATE teams SET members = array_append(members, $2) WHERE id = $1")
            .bind(team_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
