use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::ServiceError;
use crate::hint_service::HintService;
use game_core::{FeedbackMode, Game, HintEngine, category_feedback, is_valid_block, similarity_feedback};
use game_persistence::repositories::{GameRepository, LeaderboardRepository};
use game_types::{
    GameError, GameState, GuessFeedback, GuessRecord, HintRequest, RankedEntry, UserStatsResponse,
};

/// RNG seeded from `seed` when given, from OS entropy otherwise
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[derive(Debug, Clone)]
pub struct GameServiceOptions {
    pub feedback_mode: FeedbackMode,
    pub request_timeout: Duration,
    pub hint_timeout: Duration,
    pub rng_seed: Option<u64>,
}

impl Default for GameServiceOptions {
    fn default() -> Self {
        Self {
            feedback_mode: FeedbackMode::Category,
            request_timeout: Duration::from_secs(5),
            hint_timeout: Duration::from_secs(2),
            rng_seed: None,
        }
    }
}

impl From<&Config> for GameServiceOptions {
    fn from(config: &Config) -> Self {
        Self {
            feedback_mode: config.feedback_mode,
            request_timeout: config.request_timeout,
            hint_timeout: config.hint_timeout,
            rng_seed: config.rng_seed,
        }
    }
}

/// Game lifecycle on top of the datastore. Cheap to share behind an `Arc`;
/// every request goes through the same instance.
pub struct GameService {
    games: Arc<GameRepository>,
    leaderboard: Arc<LeaderboardRepository>,
    hints: Arc<dyn HintService>,
    rng: Mutex<StdRng>,
    options: GameServiceOptions,
}

impl GameService {
    pub fn new(
        games: Arc<GameRepository>,
        leaderboard: Arc<LeaderboardRepository>,
        hints: Arc<dyn HintService>,
        options: GameServiceOptions,
    ) -> Self {
        Self {
            games,
            leaderboard,
            hints,
            rng: Mutex::new(rng_from_seed(options.rng_seed)),
            options,
        }
    }

    pub fn feedback_mode(&self) -> FeedbackMode {
        self.options.feedback_mode
    }

    async fn with_timeout<T, F>(&self, operation: &'static str, future: F) -> Result<T, ServiceError>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match tokio::time::timeout(self.options.request_timeout, future).await {
            Ok(result) => result.map_err(|err| {
                tracing::error!("Failed to {}: {:#}", operation, err);
                ServiceError::Storage(err)
            }),
            Err(_) => {
                tracing::error!("Timed out while trying to {}", operation);
                Err(ServiceError::Timeout { operation })
            }
        }
    }

    pub async fn start_new_game(&self, user_id: Uuid) -> Result<GameState, ServiceError> {
        let game = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            Game::start(Uuid::new_v4(), user_id, &mut *rng)
        };

        let created = self
            .with_timeout("create game", self.games.create_game(&game.state))
            .await?;

        info!("User {} started game {}", user_id, created.id);
        Ok(created)
    }

    /// Latest active game of the user, if any
    pub async fn get_current_game(&self, user_id: Uuid) -> Result<Option<GameState>, ServiceError> {
        self.with_timeout("load current game", self.games.find_active_for_user(user_id))
            .await
    }

    pub async fn get_game(&self, user_id: Uuid, game_id: Uuid) -> Result<GameState, ServiceError> {
        let game = self
            .with_timeout("load game", self.games.find_by_id(game_id))
            .await?
            .ok_or_else(|| GameError::GameNotFound {
                game_id: game_id.to_string(),
            })?;

        if game.user_id != user_id {
            return Err(GameError::NotGameOwner.into());
        }

        Ok(game)
    }

    pub async fn list_guesses(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Vec<GuessRecord>, ServiceError> {
        self.get_game(user_id, game_id).await?;
        self.with_timeout("load guesses", self.games.list_guesses(game_id))
            .await
    }

    /// Evaluate and record one guess.
    ///
    /// Validation and state errors are returned before anything is written.
    /// Storage failures and timeouts propagate; hint failures do not.
    pub async fn submit_guess(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        guessed_block: &str,
    ) -> Result<(GuessFeedback, GameState), ServiceError> {
        if !is_valid_block(guessed_block) {
            return Err(GameError::InvalidBlock {
                block: guessed_block.to_string(),
            }
            .into());
        }

        let previous = self.get_game(user_id, game_id).await?;
        let mut game = Game::from_state(previous.clone());
        game.validate_guess(guessed_block)?;

        let feedback = self.feedback_for(&previous, guessed_block).await;
        let outcome = game.submit_guess(guessed_block)?;

        let guess = GuessRecord {
            id: Uuid::new_v4(),
            game_id,
            user_id,
            guessed_block: guessed_block.to_string(),
            is_correct: outcome.is_correct,
            feedback: feedback.clone(),
            attempt_number: outcome.attempt_number(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let stored = self
            .with_timeout(
                "record guess",
                self.games
                    .record_guess(&previous, &game.state, &guess, outcome.completion),
            )
            .await?
            .ok_or(GameError::GameNotActive)?;

        if let Some(completion) = outcome.completion {
            info!(
                "Game {} completed for user {} (won: {}, score: {})",
                game_id, user_id, completion.won, stored.score
            );
        }

        Ok((feedback, stored))
    }

    async fn feedback_for(&self, game: &GameState, guessed_block: &str) -> GuessFeedback {
        let target = game.target_block.as_str();

        match self.options.feedback_mode {
            FeedbackMode::Similarity => similarity_feedback(target, guessed_block),
            FeedbackMode::Category => {
                // Without history the hint may repeat; the guess still goes through
                let previous_hints = match self
                    .with_timeout("load previous hints", self.games.previous_hints(game.id))
                    .await
                {
                    Ok(hints) => hints,
                    Err(err) => {
                        warn!("Continuing without previous hints for game {}: {}", game.id, err);
                        Vec::new()
                    }
                };

                let request = HintRequest {
                    target_block: target.to_string(),
                    guessed_block: guessed_block.to_string(),
                    previous_hints,
                };

                let hint = match tokio::time::timeout(
                    self.options.hint_timeout,
                    self.hints.generate_hint(&request),
                )
                .await
                {
                    Ok(Ok(hint)) => hint,
                    Ok(Err(err)) => {
                        warn!("Hint generation failed for game {}: {:#}", game.id, err);
                        HintEngine::generic_fallback(Some(target))
                    }
                    Err(_) => {
                        warn!("Hint generation timed out for game {}", game.id);
                        HintEngine::generic_fallback(Some(target))
                    }
                };

                category_feedback(target, guessed_block, hint)
            }
        }
    }

    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<RankedEntry>, ServiceError> {
        self.with_timeout("load leaderboard", self.leaderboard.get_leaderboard(limit))
            .await
    }

    pub async fn get_user_stats(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserStatsResponse>, ServiceError> {
        let entry = self
            .with_timeout("load user stats", self.leaderboard.find_by_user(user_id))
            .await?;

        let Some(entry) = entry else {
            return Ok(None);
        };

        let rank = self
            .with_timeout("load user rank", self.leaderboard.get_user_rank(user_id))
            .await?;

        Ok(Some(UserStatsResponse { entry, rank }))
    }
}
