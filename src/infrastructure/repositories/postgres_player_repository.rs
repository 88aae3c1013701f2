use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::is_unique_violation;
use crate::domain::errors::DomainResult;
use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;

/// PostgreSQL implementation of [`PlayerRepository`].
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn create_many(&self, players: &[Player]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        for player in players {
            sqlx::query(
                r#"
                INSERT INTO players (
                    id, league_id, name, photo_url, tribe, status,
                    drafted_by, pick_number, total_points, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(player.id)
            .bind(player.league_id)
            .bind(&player.name)
            .bind(&player.photo_url)
            .bind(&player.tribe)
            .bind(player.status)
            .bind(player.drafted_by)
            .bind(player.pick_number)
            .bind(player.total_points)
            .bind(player.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_by_league(&self, league_id: Uuid) -> DomainResult<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            "SELECT * FROM players WHERE league_id = $1 ORDER BY name ASC",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    async fn find_by_id(&self, league_id: Uuid, player_id: Uuid) -> DomainResult<Option<Player>> {
        let player =
            sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1 AND league_id = $2")
                .bind(player_id)
                .bind(league_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(player)
    }

    async fn update(&self, player: &Player) -> DomainResult<()> {
        sqlx::query(
            r#"
            UPDATE players
            SET name = $2, photo_url = $3, tribe = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.photo_url)
        .bind(&player.tribe)
        .bind(player.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, league_id: Uuid, player_id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1 AND league_id = $2")
            .bind(player_id)
            .bind(league_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_total(&self, league_id: Uuid) -> DomainResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players WHERE league_id = $1")
                .bind(league_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn count_drafted(&self, league_id: Uuid) -> DomainResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM players WHERE league_id = $1 AND drafted_by IS NOT NULL",
        )
        .bind(league_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn draft_player(
        &self,
        player_id: Uuid,
        team_id: Uuid,
        pick_number: i32,
    ) -> DomainResult<bool> {
        // Conditional on the player still being undrafted; the pick-slot
        // unique index backstops the same guarantee across processes.
        let result = sqlx::query(
            r#"
            UPDATE players
            SET drafted_by = $2, pick_number = $3
            WHERE id = $1 AND drafted_by IS NULL
            "#,
        )
        .bind(player_id)
        .bind(team_id)
        .bind(pick_number)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(ref err) if is_unique_violation(err) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
