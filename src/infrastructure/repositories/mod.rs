// Repository implementations (data access layer)
// Adapters that implement the domain repository traits against PostgreSQL.

pub mod postgres_invite_repository;
pub mod postgres_league_repository;
pub mod postgres_player_repository;
pub mod postgres_scoring_repository;
pub mod postgres_team_repository;
pub mod postgres_user_repository;
pub mod postgres_week_repository;

pub use postgres_invite_repository::PostgresInviteRepository;
pub use postgres_league_repository::PostgresLeagueRepository;
pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_scoring_repository::PostgresScoringRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use postgres_week_repository::PostgresWeekRepository;

/// True when the error is a Postgres unique-constraint violation (23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}
