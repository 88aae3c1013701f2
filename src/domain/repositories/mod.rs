// Repository traits: the boundary contract the domain requires from
// persistence. Implementations live in `infrastructure::repositories`.

pub mod invite_repository;
pub mod league_repository;
pub mod player_repository;
pub mod scoring_repository;
pub mod team_repository;
pub mod user_repository;
pub mod week_repository;

pub use invite_repository::InviteRepository;
pub use league_repository::LeagueRepository;
pub use player_repository::PlayerRepository;
pub use scoring_repository::ScoringRepository;
pub use team_repository::TeamRepository;
pub use user_repository::{User, UserRepository};
pub use week_repository::WeekRepository;
