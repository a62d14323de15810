use crate::UserId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub total_score: i32,
    pub games_played: i32,
    pub games_won: i32,
    pub current_streak: i32,
    pub best_streak: i32,
}

impl LeaderboardEntry {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            total_score: 0,
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RankedEntry {
    pub entry: LeaderboardEntry,
    pub rank: u32,
}
