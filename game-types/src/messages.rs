use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GuessFeedback, LeaderboardEntry, SafeGameState};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitGuessRequest {
    pub guessed_block: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitGuessResponse {
    pub feedback: GuessFeedback,
    pub game_state: SafeGameState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HintRequest {
    pub target_block: String,
    pub guessed_block: String,
    #[serde(default)]
    pub previous_hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HintResponse {
    pub hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserStatsResponse {
    pub entry: LeaderboardEntry,
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
