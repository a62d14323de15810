use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Failures of the guess state machine and of game lookups.
///
/// `InvalidBlock` is a validation error; every other variant is a state
/// error. Neither kind mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("Invalid block name: {block}")]
    InvalidBlock { block: String },
    #[error("Game not found")]
    GameNotFound {
        #[serde(rename = "gameId")]
        game_id: String,
    },
    #[error("Not authorized to access this game")]
    NotGameOwner,
    #[error("Game is not active")]
    GameNotActive,
    #[error("No attempts remaining")]
    NoAttemptsRemaining,
}

impl GameError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GameError::InvalidBlock { .. })
    }
}
