use crate::{GameId, GuessId, UserId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameStatus {
    Active,
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(GameStatus::Active),
            "completed" => Some(GameStatus::Completed),
            _ => None,
        }
    }
}

/// Server-side game record. Holds the target block, so it never leaves the
/// server as-is; see [`SafeGameState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameState {
    pub id: GameId,
    pub user_id: UserId,
    pub target_block: String,
    pub status: GameStatus,
    pub attempts_remaining: i32,
    pub score: i32,
    pub created_at: String, // ISO 8601 string
}

impl GameState {
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }
}

/// Safe version of GameState that doesn't expose the target block
/// until the game is over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SafeGameState {
    pub id: GameId,
    pub user_id: UserId,
    pub status: GameStatus,
    pub attempts_remaining: i32,
    pub score: i32,
    pub target_block: Option<String>,
    pub created_at: String,
}

impl From<&GameState> for SafeGameState {
    fn from(game_state: &GameState) -> Self {
        SafeGameState {
            id: game_state.id,
            user_id: game_state.user_id,
            status: game_state.status,
            attempts_remaining: game_state.attempts_remaining,
            score: game_state.score,
            target_block: match game_state.status {
                GameStatus::Completed => Some(game_state.target_block.clone()),
                GameStatus::Active => None,
            },
            created_at: game_state.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Similarities {
    pub material: bool,
    #[serde(rename = "type")]
    pub block_type: bool,
    pub variant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GuessFeedback {
    pub is_correct: bool,
    pub hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarities: Option<Similarities>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GuessRecord {
    pub id: GuessId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub guessed_block: String,
    pub is_correct: bool,
    pub feedback: GuessFeedback,
    pub attempt_number: i32,
    pub created_at: String, // ISO 8601 string
}
