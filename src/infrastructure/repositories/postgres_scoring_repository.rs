use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::repositories::ScoringRepository;
use crate::domain::scoring::ScoringEvent;

/// PostgreSQL implementation of [`ScoringRepository`].
///
/// Point totals on players and teams are denormalized for the leaderboard;
/// both sides of every event move inside one transaction so totals can never
/// drift from the event log.
pub struct PostgresScoringRepository {
    pool: PgPool,
}

impl PostgresScoringRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoringRepository for PostgresScoringRepository {
    async fn add_event(&self, event: &ScoringEvent) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO scoring_events (
                id, league_id, week, player_id, event_type,
                description, points, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(event.id)
        .bind(event.league_id)
        .bind(event.week)
        .bind(event.player_id)
        .bind(&event.event_type)
        .bind(&event.description)
        .bind(event.points)
        .bind(event.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE players SET total_points = total_points + $2 WHERE id = $1")
            .bind(event.player_id)
            .bind(event.points)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE teams
            SET total_points = total_points + $2
            WHERE id = (SELECT drafted_by FROM players WHERE id = $1)
            "#,
        )
        .bind(event.player_id)
        .bind(event.points)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        league_id: Uuid,
        event_id: Uuid,
    ) -> DomainResult<Option<ScoringEvent>> {
        let event = sqlx::query_as::<_, ScoringEvent>(
            "SELECT * FROM scoring_events WHERE id = $1 AND league_id = $2",
        )
        .bind(event_id)
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn list_by_week(&self, league_id: Uuid, week: i32) -> DomainResult<Vec<ScoringEvent>> {
        let events = sqlx::query_as::<_, ScoringEvent>(
            r#"
            SELECT * FROM scoring_events
            WHERE league_id = $1 AND week = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(league_id)
        .bind(week)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn delete_event(&self, event: &ScoringEvent) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM scoring_events WHERE id = $1")
            .bind(event.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE players SET total_points = total_points - $2 WHERE id = $1")
            .bind(event.player_id)
            .bind(event.points)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE teams
            SET total_points = total_points - $2
            WHERE id = (SELECT drafted_by FROM players WHERE id = $1)
            "#,
        )
        .bind(event.player_id)
        .bind(event.points)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
