use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{Json, WithStatus};

use crate::config::Config;
use crate::game_service::GameService;
use crate::hint_service::LocalHintService;
use game_types::{SafeGameState, SubmitGuessRequest, SubmitGuessResponse};

pub mod config;
pub mod error;
pub mod game_service;
pub mod hint_service;

/// Header carrying the acting user's id, set by the upstream gateway
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Deserialize)]
struct LeaderboardQuery {
    limit: Option<u64>,
}

type JsonReply = WithStatus<Json>;

fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), status)
}

fn error_reply(message: &str, status: StatusCode) -> JsonReply {
    json_reply(&serde_json::json!({ "error": message }), status)
}

fn service_error_reply(err: crate::error::ServiceError) -> JsonReply {
    error_reply(&err.client_message(), err.status_code())
}

/// Resolve the acting user from the id header
fn parse_user(header: Option<String>) -> Result<Uuid, JsonReply> {
    let Some(header) = header else {
        return Err(error_reply(
            "Authentication required",
            StatusCode::UNAUTHORIZED,
        ));
    };

    Uuid::parse_str(header.trim())
        .map_err(|_| error_reply("Invalid user ID format", StatusCode::BAD_REQUEST))
}

fn parse_game_id(game_id: &str) -> Result<Uuid, JsonReply> {
    Uuid::parse_str(game_id)
        .map_err(|_| error_reply("Invalid game ID format", StatusCode::BAD_REQUEST))
}

pub fn create_routes(
    game_service: Arc<GameService>,
    hint_endpoint: Arc<LocalHintService>,
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let game_service_filter = warp::any().map({
        let game_service = game_service.clone();
        move || game_service.clone()
    });

    let hint_filter = warp::any().map({
        let hint_endpoint = hint_endpoint.clone();
        move || hint_endpoint.clone()
    });

    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    let user_header = warp::header::optional::<String>(USER_ID_HEADER);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(config_filter.clone())
        .map(|config: Arc<Config>| match config.validate() {
            Ok(()) => warp::reply::with_status("OK".to_string(), StatusCode::OK),
            Err(err) => {
                warp::reply::with_status(err.to_string(), StatusCode::SERVICE_UNAVAILABLE)
            }
        });

    let test_env = warp::path!("api" / "test-env")
        .and(warp::get())
        .and(config_filter.clone())
        .map(handle_test_env);

    let generate_hint = warp::path!("api" / "generate-hint")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(hint_filter.clone())
        .map(|body: Bytes, hints: Arc<LocalHintService>| {
            json_reply(&hints.respond(&body), StatusCode::OK)
        });

    let blocks = warp::path("blocks")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| json_reply(&game_core::all_blocks(), StatusCode::OK));

    let start_game = warp::path("games")
        .and(warp::path::end())
        .and(warp::post())
        .and(user_header.clone())
        .and(game_service_filter.clone())
        .and_then(handle_start_game);

    let current_game = warp::path!("games" / "current")
        .and(warp::get())
        .and(user_header.clone())
        .and(game_service_filter.clone())
        .and_then(handle_current_game);

    let get_game = warp::path!("games" / String)
        .and(warp::get())
        .and(user_header.clone())
        .and(game_service_filter.clone())
        .and_then(handle_get_game);

    let submit_guess = warp::path!("games" / String / "guesses")
        .and(warp::post())
        .and(user_header.clone())
        .and(warp::body::bytes())
        .and(game_service_filter.clone())
        .and_then(handle_submit_guess);

    let list_guesses = warp::path!("games" / String / "guesses")
        .and(warp::get())
        .and(user_header.clone())
        .and(game_service_filter.clone())
        .and_then(handle_list_guesses);

    // Leaderboard endpoint
    let leaderboard = warp::path("leaderboard")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<LeaderboardQuery>())
        .and(game_service_filter.clone())
        .and_then(handle_leaderboard_request);

    // User stats endpoint
    let user_stats = warp::path!("user" / String / "stats")
        .and(warp::get())
        .and(user_header.clone())
        .and(game_service_filter.clone())
        .and_then(handle_user_stats_request);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", USER_ID_HEADER])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(test_env)
        .or(generate_hint)
        .or(blocks)
        .or(start_game)
        .or(current_game)
        .or(get_game)
        .or(submit_guess)
        .or(list_guesses)
        .or(leaderboard)
        .or(user_stats)
        .with(cors)
        .with(warp::log("block_guesser"))
}

fn handle_test_env(config: Arc<Config>) -> JsonReply {
    match config.validate() {
        Ok(()) => json_reply(
            &serde_json::json!({
                "status": "success",
                "hintServiceKey": "Present",
                "message": "Environment variables loaded successfully"
            }),
            StatusCode::OK,
        ),
        Err(err) => json_reply(
            &serde_json::json!({
                "status": "error",
                "error": err.to_string(),
                "hintServiceKey": "Missing"
            }),
            StatusCode::OK,
        ),
    }
}

async fn handle_start_game(
    user_header: Option<String>,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let user_id = match parse_user(user_header) {
        Ok(user_id) => user_id,
        Err(reply) => return Ok(reply),
    };

    match game_service.start_new_game(user_id).await {
        Ok(game) => Ok(json_reply(&SafeGameState::from(&game), StatusCode::CREATED)),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_current_game(
    user_header: Option<String>,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let user_id = match parse_user(user_header) {
        Ok(user_id) => user_id,
        Err(reply) => return Ok(reply),
    };

    match game_service.get_current_game(user_id).await {
        Ok(Some(game)) => Ok(json_reply(&SafeGameState::from(&game), StatusCode::OK)),
        Ok(None) => Ok(error_reply("No active game", StatusCode::NOT_FOUND)),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_get_game(
    game_id: String,
    user_header: Option<String>,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let (user_id, game_id) = match (parse_user(user_header), parse_game_id(&game_id)) {
        (Ok(user_id), Ok(game_id)) => (user_id, game_id),
        (Err(reply), _) | (_, Err(reply)) => return Ok(reply),
    };

    match game_service.get_game(user_id, game_id).await {
        Ok(game) => Ok(json_reply(&SafeGameState::from(&game), StatusCode::OK)),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_submit_guess(
    game_id: String,
    user_header: Option<String>,
    body: Bytes,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let (user_id, game_id) = match (parse_user(user_header), parse_game_id(&game_id)) {
        (Ok(user_id), Ok(game_id)) => (user_id, game_id),
        (Err(reply), _) | (_, Err(reply)) => return Ok(reply),
    };

    let request: SubmitGuessRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => {
            return Ok(error_reply(
                "Invalid request body",
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    // The browser client sends whatever the player typed
    let guessed_block = request.guessed_block.trim().to_lowercase();

    match game_service
        .submit_guess(user_id, game_id, &guessed_block)
        .await
    {
        Ok((feedback, game)) => Ok(json_reply(
            &SubmitGuessResponse {
                feedback,
                game_state: SafeGameState::from(&game),
            },
            StatusCode::OK,
        )),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_list_guesses(
    game_id: String,
    user_header: Option<String>,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let (user_id, game_id) = match (parse_user(user_header), parse_game_id(&game_id)) {
        (Ok(user_id), Ok(game_id)) => (user_id, game_id),
        (Err(reply), _) | (_, Err(reply)) => return Ok(reply),
    };

    match game_service.list_guesses(user_id, game_id).await {
        Ok(guesses) => Ok(json_reply(&guesses, StatusCode::OK)),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_leaderboard_request(
    query: LeaderboardQuery,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let limit = query.limit.unwrap_or(10).min(100); // Default 10, max 100

    match game_service.get_leaderboard(limit).await {
        Ok(leaderboard) => Ok(json_reply(&leaderboard, StatusCode::OK)),
        Err(err) => {
            tracing::error!("Failed to fetch leaderboard: {}", err);
            Ok(error_reply(
                "Failed to fetch leaderboard",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn handle_user_stats_request(
    user_id: String,
    user_header: Option<String>,
    game_service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let requester = match parse_user(user_header) {
        Ok(requester) => requester,
        Err(reply) => return Ok(reply),
    };

    // Parse user ID as UUID
    let user_uuid = match Uuid::parse_str(&user_id) {
        Ok(uuid) => uuid,
        Err(_) => {
            return Ok(error_reply(
                "Invalid user ID format",
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    // Only allow users to view their own stats
    if requester != user_uuid {
        return Ok(error_reply(
            "Not authorized to view this user's stats",
            StatusCode::FORBIDDEN,
        ));
    }

    match game_service.get_user_stats(user_uuid).await {
        Ok(Some(stats)) => Ok(json_reply(&stats, StatusCode::OK)),
        Ok(None) => Ok(error_reply("User not found", StatusCode::NOT_FOUND)),
        Err(err) => Ok(service_error_reply(err)),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::config::HintCredential;
    use crate::game_service::{GameServiceOptions, rng_from_seed};
    use game_persistence::repositories::{GameRepository, LeaderboardRepository};
    use game_types::{GameStatus, RankedEntry};
    use migration::{Migrator, MigratorTrait};
    use std::time::Duration;

    fn test_config(hint_api_key: &str) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            hint_api_key: HintCredential::new(hint_api_key),
            hint_service_url: None,
            feedback_mode: game_core::FeedbackMode::Category,
            request_timeout: Duration::from_secs(5),
            hint_timeout: Duration::from_secs(1),
            rng_seed: Some(7),
        }
    }

    async fn create_test_service() -> (Arc<GameService>, Arc<LocalHintService>) {
        // Create in-memory database for tests
        let db = game_persistence::connection::connect_to_memory_database()
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();

        let hint_endpoint = Arc::new(LocalHintService::new(rng_from_seed(Some(7))));
        let game_service = Arc::new(GameService::new(
            Arc::new(GameRepository::new(db.clone())),
            Arc::new(LeaderboardRepository::new(db)),
            hint_endpoint.clone(),
            GameServiceOptions {
                rng_seed: Some(7),
                ..GameServiceOptions::default()
            },
        ));
        (game_service, hint_endpoint)
    }

    async fn create_test_app_with_config(
        config: Config,
    ) -> (
        impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone,
        Arc<GameService>,
    ) {
        let (game_service, hint_endpoint) = create_test_service().await;
        let routes = create_routes(game_service.clone(), hint_endpoint, Arc::new(config));
        (routes, game_service)
    }

    async fn create_test_app() -> (
        impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone,
        Arc<GameService>,
    ) {
        create_test_app_with_config(test_config("test-key")).await
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "OK");
    }

    #[tokio::test]
    async fn test_health_reports_missing_credential() {
        let (app, _) = create_test_app_with_config(test_config("")).await;

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 503);
        assert_eq!(
            response.body(),
            "Missing required environment variables: HINT_SERVICE_API_KEY"
        );

        let response = warp::test::request()
            .method("GET")
            .path("/api/test-env")
            .reply(&app)
            .await;
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["hintServiceKey"], "Missing");
    }

    #[tokio::test]
    async fn test_env_endpoint_never_leaks_credential() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/api/test-env")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains("Present"));
        assert!(!body.contains("test-key"));
    }

    #[tokio::test]
    async fn test_generate_hint_endpoint() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("POST")
            .path("/api/generate-hint")
            .json(&serde_json::json!({
                "targetBlock": "stone",
                "guessedBlock": "dirt",
                "previousHints": []
            }))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let body: game_types::HintResponse = serde_json::from_slice(response.body()).unwrap();
        assert!(!body.hint.is_empty());
    }

    #[tokio::test]
    async fn test_generate_hint_never_fails_visibly() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("POST")
            .path("/api/generate-hint")
            .body("{not json")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let body: game_types::HintResponse = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body.hint, "Look for something in the unknown category!");
    }

    #[tokio::test]
    async fn test_blocks_endpoint() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/blocks")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let blocks: Vec<String> = serde_json::from_slice(response.body()).unwrap();
        assert!(blocks.contains(&"stone".to_string()));
        assert_eq!(blocks.len(), game_core::all_blocks().len());
    }

    #[tokio::test]
    async fn test_start_game_requires_user() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("POST")
            .path("/games")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 401);

        let response = warp::test::request()
            .method("POST")
            .path("/games")
            .header(USER_ID_HEADER, "not-a-uuid")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_start_game_hides_target() {
        let (app, _) = create_test_app().await;
        let user_id = Uuid::new_v4();

        let response = warp::test::request()
            .method("POST")
            .path("/games")
            .header(USER_ID_HEADER, user_id.to_string())
            .reply(&app)
            .await;

        assert_eq!(response.status(), 201);
        let game: SafeGameState = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.attempts_remaining, 6);
        assert_eq!(game.target_block, None);

        let response = warp::test::request()
            .method("GET")
            .path("/games/current")
            .header(USER_ID_HEADER, user_id.to_string())
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let current: SafeGameState = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(current.id, game.id);
    }

    #[tokio::test]
    async fn test_current_game_not_found() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/games/current")
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_submit_guess_flow() {
        let (app, service) = create_test_app().await;
        let user_id = Uuid::new_v4();
        let game = service.start_new_game(user_id).await.unwrap();

        // Invalid block is a validation error
        let response = warp::test::request()
            .method("POST")
            .path(&format!("/games/{}/guesses", game.id))
            .header(USER_ID_HEADER, user_id.to_string())
            .json(&serde_json::json!({ "guessedBlock": "not_a_block" }))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 400);

        // Input is normalized the way the client does it
        let response = warp::test::request()
            .method("POST")
            .path(&format!("/games/{}/guesses", game.id))
            .header(USER_ID_HEADER, user_id.to_string())
            .json(&serde_json::json!({ "guessedBlock": format!("  {}  ", game.target_block.to_uppercase()) }))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);

        let body: SubmitGuessResponse = serde_json::from_slice(response.body()).unwrap();
        assert!(body.feedback.is_correct);
        assert_eq!(body.game_state.status, GameStatus::Completed);
        assert_eq!(body.game_state.score, 600);
        assert_eq!(body.game_state.target_block.as_deref(), Some(game.target_block.as_str()));

        // Completed games reject further guesses
        let response = warp::test::request()
            .method("POST")
            .path(&format!("/games/{}/guesses", game.id))
            .header(USER_ID_HEADER, user_id.to_string())
            .json(&serde_json::json!({ "guessedBlock": "stone" }))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 409);
        let error: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(error["error"], "Game is not active");

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/games/{}/guesses", game.id))
            .header(USER_ID_HEADER, user_id.to_string())
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let guesses: Vec<game_types::GuessRecord> = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(guesses.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_guess_bad_requests() {
        let (app, service) = create_test_app().await;
        let user_id = Uuid::new_v4();
        let game = service.start_new_game(user_id).await.unwrap();

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/games/{}/guesses", game.id))
            .header(USER_ID_HEADER, user_id.to_string())
            .body("garbage")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 400);

        let response = warp::test::request()
            .method("POST")
            .path("/games/not-a-uuid/guesses")
            .header(USER_ID_HEADER, user_id.to_string())
            .json(&serde_json::json!({ "guessedBlock": "stone" }))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 400);
        let error: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(error["error"], "Invalid game ID format");

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/games/{}/guesses", Uuid::new_v4()))
            .header(USER_ID_HEADER, user_id.to_string())
            .json(&serde_json::json!({ "guessedBlock": "stone" }))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_other_users_game_is_forbidden() {
        let (app, service) = create_test_app().await;
        let owner = Uuid::new_v4();
        let game = service.start_new_game(owner).await.unwrap();

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/games/{}", game.id))
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .reply(&app)
            .await;
        assert_eq!(response.status(), 403);

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/games/{}/guesses", game.id))
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .json(&serde_json::json!({ "guessedBlock": "stone" }))
            .reply(&app)
            .await;
        assert_eq!(response.status(), 403);
    }

    #[tokio::test]
    async fn test_leaderboard_endpoint_empty() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/leaderboard")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);

        let leaderboard: Vec<RankedEntry> =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(leaderboard.len(), 0);
    }

    #[tokio::test]
    async fn test_leaderboard_after_win() {
        let (app, service) = create_test_app().await;
        let user_id = Uuid::new_v4();
        let game = service.start_new_game(user_id).await.unwrap();
        service
            .submit_guess(user_id, game.id, &game.target_block)
            .await
            .unwrap();

        let response = warp::test::request()
            .method("GET")
            .path("/leaderboard?limit=1000")
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let leaderboard: Vec<RankedEntry> = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(leaderboard.len(), 1);
        assert_eq!(leaderboard[0].entry.total_score, 600);
        assert_eq!(leaderboard[0].rank, 1);

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/user/{}/stats", user_id))
            .header(USER_ID_HEADER, user_id.to_string())
            .reply(&app)
            .await;
        assert_eq!(response.status(), 200);
        let stats: game_types::UserStatsResponse = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(stats.rank, Some(1));
        assert_eq!(stats.entry.games_played, 1);
    }

    #[tokio::test]
    async fn test_user_stats_endpoint_unauthorized() {
        let (app, _) = create_test_app().await;
        let user_id = Uuid::new_v4();

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/user/{}/stats", user_id))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 401);

        let error: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(error["error"], "Authentication required");
    }

    #[tokio::test]
    async fn test_user_stats_endpoint_forbidden() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/user/{}/stats", Uuid::new_v4()))
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .reply(&app)
            .await;

        assert_eq!(response.status(), 403);

        let error: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(error["error"], "Not authorized to view this user's stats");
    }

    #[tokio::test]
    async fn test_user_stats_endpoint_user_not_found() {
        let (app, _) = create_test_app().await;
        let user_id = Uuid::new_v4();

        let response = warp::test::request()
            .method("GET")
            .path(&format!("/user/{}/stats", user_id))
            .header(USER_ID_HEADER, user_id.to_string())
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_invalid_routes() {
        let (app, _) = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/nonexistent")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }
}
