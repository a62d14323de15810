use game_types::{GameError, GameId, GameState, GameStatus, UserId};
use rand::Rng;
use tracing::debug;

use crate::catalog::{is_valid_block, random_block};
use crate::scoring::{GameCompletion, MAX_ATTEMPTS, ScoringEngine};

/// What a single accepted guess did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub is_correct: bool,
    pub score_delta: i32,
    pub attempts_before: i32,
    /// Set when this guess ended the game
    pub completion: Option<GameCompletion>,
}

impl GuessOutcome {
    /// 1-based position of this guess within the game
    pub fn attempt_number(&self) -> i32 {
        MAX_ATTEMPTS - self.attempts_before + 1
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
}

impl Game {
    pub fn start<R: Rng + ?Sized>(id: GameId, user_id: UserId, rng: &mut R) -> Self {
        Self::with_target(id, user_id, random_block(rng).to_string())
    }

    pub fn with_target(id: GameId, user_id: UserId, target_block: String) -> Self {
        let state = GameState {
            id,
            user_id,
            target_block,
            status: GameStatus::Active,
            attempts_remaining: MAX_ATTEMPTS,
            score: 0,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        Self { state }
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Check that a guess may be applied, without touching the game
    pub fn validate_guess(&self, block: &str) -> Result<(), GameError> {
        if !is_valid_block(block) {
            return Err(GameError::InvalidBlock {
                block: block.to_string(),
            });
        }
        if self.state.status != GameStatus::Active {
            return Err(GameError::GameNotActive);
        }
        if self.state.attempts_remaining <= 0 {
            return Err(GameError::NoAttemptsRemaining);
        }
        Ok(())
    }

    /// Apply one guess. On error the game is left exactly as it was.
    pub fn submit_guess(&mut self, block: &str) -> Result<GuessOutcome, GameError> {
        self.validate_guess(block)?;

        let attempts_before = self.state.attempts_remaining;
        let is_correct = self.state.target_block == block;

        self.state.attempts_remaining -= 1;

        let completion = if is_correct {
            let score_delta = ScoringEngine::points_for_correct_guess(attempts_before);
            self.state.score += score_delta;
            self.state.status = GameStatus::Completed;
            Some(GameCompletion {
                score_delta,
                won: true,
            })
        } else if self.state.attempts_remaining == 0 {
            self.state.status = GameStatus::Completed;
            Some(GameCompletion {
                score_delta: 0,
                won: false,
            })
        } else {
            None
        };

        debug!(
            game_id = %self.state.id,
            attempts_remaining = self.state.attempts_remaining,
            is_correct,
            "Applied guess"
        );

        Ok(GuessOutcome {
            is_correct,
            score_delta: completion.map_or(0, |c| c.score_delta),
            attempts_before,
            completion,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.state.status == GameStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn game_with_target(target: &str) -> Game {
        Game::with_target(Uuid::new_v4(), Uuid::new_v4(), target.to_string())
    }

    #[test]
    fn test_new_game_starts_active_with_full_attempts() {
        let game = game_with_target("stone");
        assert_eq!(game.state.status, GameStatus::Active);
        assert_eq!(game.state.attempts_remaining, MAX_ATTEMPTS);
        assert_eq!(game.state.score, 0);
    }

    #[test]
    fn test_correct_first_guess_scores_full_points() {
        let mut game = game_with_target("stone");
        let outcome = game.submit_guess("stone").unwrap();

        assert!(outcome.is_correct);
        assert_eq!(outcome.score_delta, 600);
        assert_eq!(outcome.attempt_number(), 1);
        assert_eq!(game.state.score, 600);
        assert_eq!(game.state.attempts_remaining, 5);
        assert!(game.is_completed());
    }

    #[test]
    fn test_incorrect_guess_only_consumes_an_attempt() {
        let mut game = game_with_target("stone");
        let outcome = game.submit_guess("dirt").unwrap();

        assert!(!outcome.is_correct);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.completion, None);
        assert_eq!(game.state.attempts_remaining, 5);
        assert_eq!(game.state.score, 0);
        assert!(game.state.is_active());
    }

    #[test]
    fn test_invalid_block_is_rejected_without_mutation() {
        let mut game = game_with_target("stone");
        let before = game.state.clone();

        let err = game.submit_guess("not_a_block").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(game.state, before);
    }
}
