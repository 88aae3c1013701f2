//! End-to-end API integration tests
//!
//! These run against a live PostgreSQL instance (set `DATABASE_URL`) and are
//! ignored by default: `cargo test -- --ignored` with the database up.
//!
//! Coverage: registration/login, league and team setup, and the full snake
//! draft lifecycle including turn enforcement and the concurrent-pick race.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::util::ServiceExt; // for oneshot
use uuid::Uuid;

use castaway_league_api::api::{router, state::AppState};

/// Set up the test database connection and schema.
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn setup_app(pool: PgPool) -> Router {
    router(AppState::new(pool))
}

/// Remove everything hanging off a league (cascades) plus the given users.
async fn cleanup(pool: &PgPool, league_id: Uuid, user_ids: &[Uuid]) {
    sqlx::query("DELETE FROM leagues WHERE id = $1")
        .bind(league_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup league");
    for user_id in user_ids {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(pool)
            .await
            .expect("Failed to cleanup user");
    }
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Registers a fresh user and logs in; returns (user_id, token).
async fn register_and_login(app: &Router, label: &str) -> (Uuid, String) {
    let email = format!("{}-{}@test.com", label, Uuid::new_v4());
    let (status, body) = send_json(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": "testpassword123",
            "display_name": label,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    let user_id = Uuid::parse_str(body["user_id"].as_str().unwrap()).unwrap();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "testpassword123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let token = body["token"].as_str().unwrap().to_string();

    (user_id, token)
}

/// Creates a league with randomization disabled so draft order is the team
/// creation order and tests stay deterministic.
async fn create_league(app: &Router, token: &str) -> Uuid {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/leagues",
        Some(token),
        Some(json!({
            "name": "Integration Test League",
            "settings": {
                "max_teams": 8,
                "draft": { "randomized_order": false },
                "scoring_rules": { "immunity_win": 5, "voted_out": -3 }
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create league failed: {body}");
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

async fn create_team(app: &Router, token: &str, league_id: Uuid, name: &str) -> Uuid {
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/api/leagues/{league_id}/teams"),
        Some(token),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create team failed: {body}");
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

/// Imports `count` contestants; returns their ids in name order (the order
/// the list endpoint reports).
async fn import_players(app: &Router, token: &str, league_id: Uuid, count: usize) -> Vec<Uuid> {
    let players: Vec<Value> = (0..count)
        .map(|i| json!({ "name": format!("Contestant {:02}", i) }))
        .collect();
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/api/leagues/{league_id}/players/import"),
        Some(token),
        Some(json!({ "players": players })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "import failed: {body}");

    body["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| Uuid::parse_str(p["id"].as_str().unwrap()).unwrap())
        .collect()
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_health_check() {
    let pool = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_register_and_login_flow() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (user_id, token) = register_and_login(&app, "login-flow").await;
    assert!(!token.is_empty());

    // Token works against a protected route.
    let (status, body) = send_json(&app, "GET", "/api/leagues/mine", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK, "mine failed: {body}");
    assert!(body.as_array().unwrap().is_empty());

    // And the same route rejects anonymous callers.
    let (status, _) = send_json(&app, "GET", "/api/leagues/mine", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_draft_start_assigns_creation_order_when_not_randomized() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (admin_id, admin_token) = register_and_login(&app, "draft-admin").await;
    let league_id = create_league(&app, &admin_token).await;

    let mut user_ids = vec![admin_id];
    let mut team_ids = Vec::new();
    team_ids.push(create_team(&app, &admin_token, league_id, "Team One").await);
    for (i, label) in ["two", "three", "four"].iter().enumerate() {
        let (user_id, token) = register_and_login(&app, &format!("member-{label}")).await;
        user_ids.push(user_id);
        team_ids.push(create_team(&app, &token, league_id, &format!("Team {}", i + 2)).await);
    }

    import_players(&app, &admin_token, league_id, 8).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/start"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "start failed: {body}");
    assert_eq!(body["draft_order"], json!([1, 2, 3, 4]));
    assert_eq!(body["league"]["status"], "draft");

    // Status endpoint reports the first team on the clock.
    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/leagues/{league_id}/draft/status"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "draft");
    assert_eq!(body["total_players"], 8);
    assert_eq!(body["drafted_players"], 0);
    assert_eq!(
        body["current_pick_team"]["id"].as_str().unwrap(),
        team_ids[0].to_string()
    );

    // A second start without a reset is rejected.
    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/start"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    cleanup(&pool, league_id, &user_ids).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_snake_draft_turn_enforcement() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (admin_id, admin_token) = register_and_login(&app, "snake-admin").await;
    let league_id = create_league(&app, &admin_token).await;

    let mut user_ids = vec![admin_id];
    let mut tokens = vec![admin_token.clone()];
    let mut team_ids = vec![create_team(&app, &admin_token, league_id, "Alpha").await];
    for name in ["Bravo", "Charlie"] {
        let (user_id, token) = register_and_login(&app, &format!("snake-{name}")).await;
        user_ids.push(user_id);
        team_ids.push(create_team(&app, &token, league_id, name).await);
        tokens.push(token);
    }

    let player_ids = import_players(&app, &admin_token, league_id, 6).await;

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/start"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let pick_uri = format!("/api/leagues/{league_id}/draft/pick");

    // Second team jumping the first team's turn is rejected with no mutation.
    let (status, body) = send_json(
        &app,
        "POST",
        &pick_uri,
        Some(&tokens[1]),
        Some(json!({ "player_id": player_ids[0], "team_id": team_ids[1] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["error"], "It is not your turn to pick");

    // Picking for a team the caller doesn't belong to is forbidden.
    let (status, _) = send_json(
        &app,
        "POST",
        &pick_uri,
        Some(&tokens[1]),
        Some(json!({ "player_id": player_ids[0], "team_id": team_ids[0] })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Snake order over 3 teams: picks 1..6 go to teams 0,1,2,2,1,0.
    let snake: [usize; 6] = [0, 1, 2, 2, 1, 0];
    for (pick, &team_index) in snake.iter().enumerate() {
        let (status, body) = send_json(
            &app,
            "POST",
            &pick_uri,
            Some(&tokens[team_index]),
            Some(json!({
                "player_id": player_ids[pick],
                "team_id": team_ids[team_index],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "pick {} failed: {body}", pick + 1);
        assert_eq!(body["player"]["pick_number"], pick as i64 + 1);
    }

    // Re-drafting an already-drafted player conflicts regardless of turn.
    let (status, body) = send_json(
        &app,
        "POST",
        &pick_uri,
        Some(&tokens[0]),
        Some(json!({ "player_id": player_ids[0], "team_id": team_ids[0] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Player already drafted");

    // All players drafted; status shows no team on the clock.
    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/leagues/{league_id}/draft/status"),
        None,
        None,
    )
    .await;
    assert_eq!(body["drafted_players"], 6);
    assert!(body["current_pick_team"].is_null());

    // Rosters reflect pick order within each team.
    let first_team = &body["teams"][0];
    assert_eq!(first_team["id"].as_str().unwrap(), team_ids[0].to_string());
    let roster: Vec<i64> = first_team["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pick_number"].as_i64().unwrap())
        .collect();
    assert_eq!(roster, vec![1, 6]);

    cleanup(&pool, league_id, &user_ids).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_concurrent_picks_exactly_one_succeeds() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (admin_id, admin_token) = register_and_login(&app, "race-admin").await;
    let league_id = create_league(&app, &admin_token).await;

    let team_a = create_team(&app, &admin_token, league_id, "Racer A").await;
    let (user_b, token_b) = register_and_login(&app, "race-b").await;
    let _team_b = create_team(&app, &token_b, league_id, "Racer B").await;

    let player_ids = import_players(&app, &admin_token, league_id, 4).await;

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/start"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Two valid-looking submissions for pick 1 from the same team, different
    // players, fired concurrently. Exactly one may win the slot.
    let pick_uri = format!("/api/leagues/{league_id}/draft/pick");
    let app_a = app.clone();
    let app_b = app.clone();
    let (token_a1, token_a2) = (admin_token.clone(), admin_token.clone());
    let (player_one, player_two) = (player_ids[0], player_ids[1]);
    let uri_a = pick_uri.clone();
    let uri_b = pick_uri.clone();

    let first = tokio::spawn(async move {
        send_json(
            &app_a,
            "POST",
            &uri_a,
            Some(&token_a1),
            Some(json!({ "player_id": player_one, "team_id": team_a })),
        )
        .await
    });
    let second = tokio::spawn(async move {
        send_json(
            &app_b,
            "POST",
            &uri_b,
            Some(&token_a2),
            Some(json!({ "player_id": player_two, "team_id": team_a })),
        )
        .await
    });

    let (first, second) = (first.await.unwrap(), second.await.unwrap());
    let statuses = [first.0, second.0];

    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::OK).count(),
        1,
        "exactly one concurrent pick should succeed: {statuses:?}"
    );
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::CONFLICT)
            .count(),
        1,
        "the loser should see a conflict: {statuses:?}"
    );

    // Exactly one player claimed pick slot 1.
    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/leagues/{league_id}/draft/status"),
        None,
        None,
    )
    .await;
    assert_eq!(body["drafted_players"], 1);

    cleanup(&pool, league_id, &[admin_id, user_b]).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_reset_clears_epoch_and_allows_restart() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (admin_id, admin_token) = register_and_login(&app, "reset-admin").await;
    let league_id = create_league(&app, &admin_token).await;
    let team_id = create_team(&app, &admin_token, league_id, "Phoenix").await;
    let player_ids = import_players(&app, &admin_token, league_id, 2).await;

    let start_uri = format!("/api/leagues/{league_id}/draft/start");
    let (status, _) = send_json(&app, "POST", &start_uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/pick"),
        Some(&admin_token),
        Some(json!({ "player_id": player_ids[0], "team_id": team_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/reset"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Everything back to setup: no orders, no drafted players.
    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/leagues/{league_id}/draft/status"),
        None,
        None,
    )
    .await;
    assert_eq!(body["status"], "setup");
    assert_eq!(body["drafted_players"], 0);
    assert!(body["teams"][0]["draft_order"].is_null());
    assert!(body["teams"][0]["players"].as_array().unwrap().is_empty());

    // A fresh epoch starts cleanly.
    let (status, body) = send_json(&app, "POST", &start_uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK, "restart failed: {body}");
    assert_eq!(body["draft_order"], json!([1]));

    cleanup(&pool, league_id, &[admin_id]).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_scoring_updates_player_and_team_totals() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (admin_id, admin_token) = register_and_login(&app, "score-admin").await;
    let league_id = create_league(&app, &admin_token).await;
    let team_id = create_team(&app, &admin_token, league_id, "Scorers").await;
    let player_ids = import_players(&app, &admin_token, league_id, 2).await;

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/start"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/draft/pick"),
        Some(&admin_token),
        Some(json!({ "player_id": player_ids[0], "team_id": team_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Unknown event types are rejected against the league's rules.
    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/scoring/add"),
        Some(&admin_token),
        Some(json!({
            "week": 1, "player_id": player_ids[0], "event_type": "moon_landing"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Rule lookup is case-insensitive; points flow to player and team.
    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/scoring/add"),
        Some(&admin_token),
        Some(json!({
            "week": 1, "player_id": player_ids[0], "event_type": "immunity_win",
            "description": "won the log-rolling challenge"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["event"]["points"], 5);
    let event_id = body["event"]["id"].as_str().unwrap().to_string();

    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/leagues/{league_id}/teams/leaderboard"),
        None,
        None,
    )
    .await;
    assert_eq!(body[0]["total_points"], 5);
    assert_eq!(body[0]["players"][0]["total_points"], 5);

    // Deleting the event reverses both totals.
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/leagues/{league_id}/scoring/{event_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/leagues/{league_id}/teams/leaderboard"),
        None,
        None,
    )
    .await;
    assert_eq!(body[0]["total_points"], 0);

    cleanup(&pool, league_id, &[admin_id]).await;
}

#[tokio::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn test_invite_redemption_founds_a_team() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (admin_id, admin_token) = register_and_login(&app, "invite-admin").await;
    let league_id = create_league(&app, &admin_token).await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/leagues/{league_id}/invites"),
        Some(&admin_token),
        Some(json!({ "invite_type": "league" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let code = body["code"].as_str().unwrap().to_string();

    let (newcomer_id, newcomer_token) = register_and_login(&app, "invite-newcomer").await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/invites/redeem",
        Some(&newcomer_token),
        Some(json!({ "code": code.to_lowercase(), "team_name": "Walk-Ons" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["team"]["name"], "Walk-Ons");

    // The newcomer now belongs to a team, so a second redemption conflicts.
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/invites/redeem",
        Some(&newcomer_token),
        Some(json!({ "code": code, "team_name": "Double Dippers" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    cleanup(&pool, league_id, &[admin_id, newcomer_id]).await;
}
