// API layer module (HTTP adapter)

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use handlers::{auth, draft, invites, leagues, players, scoring, teams, weeks};
use state::AppState;

/// Builds the full application router. Shared between `main` and the
/// integration tests so both exercise identical routing.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // League routes
        .route("/api/leagues", post(leagues::create_league))
        .route("/api/leagues/mine", get(leagues::my_leagues))
        .route("/api/leagues/:league_id", get(leagues::get_league))
        .route(
            "/api/leagues/:league_id/settings",
            patch(leagues::update_settings),
        )
        .route(
            "/api/leagues/:league_id/status",
            post(leagues::update_status),
        )
        // Team routes
        .route(
            "/api/leagues/:league_id/teams",
            post(teams::create_team).get(teams::list_teams),
        )
        .route(
            "/api/leagues/:league_id/teams/leaderboard",
            get(teams::leaderboard),
        )
        .route(
            "/api/leagues/:league_id/teams/:team_id/join",
            post(teams::join_team),
        )
        // Player routes
        .route("/api/leagues/:league_id/players", get(players::list_players))
        .route(
            "/api/leagues/:league_id/players/import",
            post(players::import_players),
        )
        .route(
            "/api/leagues/:league_id/players/:player_id",
            patch(players::update_player).delete(players::delete_player),
        )
        // Draft routes
        .route("/api/leagues/:league_id/draft/start", post(draft::start_draft))
        .route("/api/leagues/:league_id/draft/pick", post(draft::submit_pick))
        .route("/api/leagues/:league_id/draft/reset", post(draft::reset_draft))
        .route("/api/leagues/:league_id/draft/status", get(draft::draft_status))
        // Scoring routes
        .route("/api/leagues/:league_id/scoring/add", post(scoring::add_event))
        .route(
            "/api/leagues/:league_id/scoring/week/:week",
            get(scoring::week_events),
        )
        .route(
            "/api/leagues/:league_id/scoring/:event_id",
            delete(scoring::delete_event),
        )
        // Week routes
        .route(
            "/api/leagues/:league_id/weeks",
            get(weeks::list_weeks).post(weeks::create_week),
        )
        .route(
            "/api/leagues/:league_id/weeks/bulk",
            post(weeks::bulk_create_weeks),
        )
        .route(
            "/api/leagues/:league_id/weeks/:week/finalize",
            patch(weeks::finalize_week),
        )
        // Invite routes
        .route(
            "/api/leagues/:league_id/invites",
            post(invites::create_invite).get(invites::list_invites),
        )
        .route("/api/invites/redeem", post(invites::redeem_invite))
        .with_state(state)
}
