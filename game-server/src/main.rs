use std::net::IpAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use game_persistence::connection::connect_and_migrate;
use game_persistence::repositories::{GameRepository, LeaderboardRepository};
use game_server::{
    config::Config,
    create_routes,
    game_service::{GameService, GameServiceOptions, rng_from_seed},
    hint_service::{HintService, LocalHintService, RemoteHintService},
};

async fn shutdown_signal() {
    // Wait for SIGINT (Ctrl+C) or SIGTERM
    #[cfg(unix)]
    {
        use signal::unix::{SignalKind, signal};

        let (mut sigint, mut sigterm) =
            match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
                (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
                _ => {
                    tracing::error!("Failed to install signal handlers");
                    return std::future::pending().await;
                }
            };

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to listen for ctrl+c");
            return std::future::pending().await;
        }
        info!("Received Ctrl+C, shutting down gracefully...");
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Block Guesser server...");

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let host: IpAddr = match config.host.parse() {
        Ok(host) => host,
        Err(_) => {
            tracing::error!("HOST is not a valid IP address: {}", config.host);
            std::process::exit(1);
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let game_repository = Arc::new(GameRepository::new(db.clone()));
    let leaderboard_repository = Arc::new(LeaderboardRepository::new(db));

    let hint_endpoint = Arc::new(LocalHintService::new(rng_from_seed(config.rng_seed)));
    let hint_service: Arc<dyn HintService> = match &config.hint_service_url {
        Some(url) => {
            match RemoteHintService::new(url, config.hint_api_key.clone(), config.hint_timeout) {
                Ok(remote) => {
                    info!("Using remote hint service at {}", remote.endpoint());
                    Arc::new(remote)
                }
                Err(e) => {
                    tracing::error!("Failed to set up hint service client: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("Using in-process hint generation");
            hint_endpoint.clone()
        }
    };

    info!("Feedback mode: {:?}", config.feedback_mode);

    let game_service = Arc::new(GameService::new(
        game_repository,
        leaderboard_repository,
        hint_service,
        GameServiceOptions::from(config.as_ref()),
    ));

    let routes = create_routes(game_service, hint_endpoint, config.clone());

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) =
        match warp::serve(routes).try_bind_with_graceful_shutdown((host, config.port), shutdown_signal()) {
            Ok(bound) => bound,
            Err(e) => {
                tracing::error!("Failed to bind {}:{}: {}", config.host, config.port, e);
                std::process::exit(1);
            }
        };

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
