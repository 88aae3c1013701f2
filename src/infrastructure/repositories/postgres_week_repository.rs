use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::is_unique_violation;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repositories::WeekRepository;
use crate::domain::week::{Week, WeekStatus};

/// PostgreSQL implementation of [`WeekRepository`].
pub struct PostgresWeekRepository {
    pool: PgPool,
}

impl PostgresWeekRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_week<'e, E>(executor: E, week: &Week) -> Result<(), sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO weeks (
            id, league_id, week_number, episode_date, title,
            status, scoring_finalized, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(week.id)
    .bind(week.league_id)
    .bind(week.week_number)
    .bind(week.episode_date)
    .bind(&week.title)
    .bind(week.status)
    .bind(week.scoring_finalized)
    .bind(week.created_at)
    .execute(executor)
    .await?;

    Ok(())
}

#[async_trait]
impl WeekRepository for PostgresWeekRepository {
    async fn create(&self, week: &Week) -> DomainResult<()> {
        insert_week(&self.pool, week).await.map_err(|err| {
            if is_unique_violation(&err) {
                DomainError::conflict("Week already exists")
            } else {
                err.into()
            }
        })
    }

    async fn create_many(&self, weeks: &[Week]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        for week in weeks {
            insert_week(&mut *tx, week).await.map_err(|err| {
                if is_unique_violation(&err) {
                    DomainError::conflict(format!("Week {} already exists", week.week_number))
                } else {
                    DomainError::from(err)
                }
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Week>> {
        let weeks = sqlx::query_as::<_, Week>(
            "SELECT * FROM weeks WHERE league_id = $1 ORDER BY week_number ASC",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(weeks)
    }

    async fn find_by_number(
        &self,
        league_id: Uuid,
        week_number: i32,
    ) -> DomainResult<Option<Week>> {
        let week = sqlx::query_as::<_, Week>(
            "SELECT * FROM weeks WHERE league_id = $1 AND week_number = $2",
        )
        .bind(league_id)
        .bind(week_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(week)
    }

    async fn finalize(&self, league_id: Uuid, week_number: i32) -> DomainResult<Option<Week>> {
        let week = sqlx::query_as::<_, Week>(
            r#"
            UPDATE weeks
            SET scoring_finalized = TRUE, status = $3
            WHERE league_id = $1 AND week_number = $2
            RETURNING *
            "#,
        )
        .bind(league_id)
        .bind(week_number)
        .bind(WeekStatus::Closed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(week)
    }
}
