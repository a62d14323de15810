use anyhow::{Result, anyhow};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::warn;
use uuid::Uuid;

use crate::entities::{leaderboard, prelude::*};
use game_core::{GameCompletion, ScoringEngine};
use game_types::{LeaderboardEntry, RankedEntry};

pub struct LeaderboardRepository {
    db: DatabaseConnection,
}

fn model_to_entry(model: &leaderboard::Model) -> LeaderboardEntry {
    LeaderboardEntry {
        user_id: model.user_id,
        total_score: model.total_score,
        games_played: model.games_played,
        games_won: model.games_won,
        current_streak: model.current_streak,
        best_streak: model.best_streak,
    }
}

const COMPLETION_ATTEMPTS: usize = 3;

/// Fold a completed game into the user's entry, creating it on first use.
/// Takes any connection so it can run inside the guess transaction.
///
/// The entry is created with `ON CONFLICT DO NOTHING` and then updated only
/// if `games_played` still has the value that was read, so two completions
/// for the same user never overwrite each other.
pub(crate) async fn apply_completion<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    completion: GameCompletion,
) -> Result<LeaderboardEntry> {
    let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();

    let empty = LeaderboardEntry::empty(user_id);
    let seed = leaderboard::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        total_score: ActiveValue::Set(empty.total_score),
        games_played: ActiveValue::Set(empty.games_played),
        games_won: ActiveValue::Set(empty.games_won),
        current_streak: ActiveValue::Set(empty.current_streak),
        best_streak: ActiveValue::Set(empty.best_streak),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    };
    Leaderboard::insert(seed)
        .on_conflict(
            OnConflict::column(leaderboard::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    for _ in 0..COMPLETION_ATTEMPTS {
        let model = Leaderboard::find()
            .filter(leaderboard::Column::UserId.eq(user_id))
            .one(conn)
            .await?
            .ok_or_else(|| anyhow!("Leaderboard entry for user {} is missing", user_id))?;

        let entry = ScoringEngine::apply_completion(model_to_entry(&model), completion);
        let result = Leaderboard::update_many()
            .col_expr(leaderboard::Column::TotalScore, Expr::value(entry.total_score))
            .col_expr(leaderboard::Column::GamesPlayed, Expr::value(entry.games_played))
            .col_expr(leaderboard::Column::GamesWon, Expr::value(entry.games_won))
            .col_expr(leaderboard::Column::CurrentStreak, Expr::value(entry.current_streak))
            .col_expr(leaderboard::Column::BestStreak, Expr::value(entry.best_streak))
            .col_expr(leaderboard::Column::UpdatedAt, Expr::value(now))
            .filter(leaderboard::Column::UserId.eq(user_id))
            .filter(leaderboard::Column::GamesPlayed.eq(model.games_played))
            .exec(conn)
            .await?;

        if result.rows_affected == 1 {
            return Ok(entry);
        }

        warn!(%user_id, "Leaderboard entry changed concurrently, retrying");
    }

    Err(anyhow!(
        "Could not update leaderboard entry for user {} after {} attempts",
        user_id,
        COMPLETION_ATTEMPTS
    ))
}

impl LeaderboardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<LeaderboardEntry>> {
        let model = Leaderboard::find()
            .filter(leaderboard::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(model.as_ref().map(model_to_entry))
    }

    pub async fn record_completion(
        &self,
        user_id: Uuid,
        completion: GameCompletion,
    ) -> Result<LeaderboardEntry> {
        apply_completion(&self.db, user_id, completion).await
    }

    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<RankedEntry>> {
        let models = Leaderboard::find()
            .order_by_desc(leaderboard::Column::TotalScore)
            .order_by_asc(leaderboard::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        // Tied totals share a rank, matching get_user_rank
        let mut leaderboard: Vec<RankedEntry> = Vec::with_capacity(models.len());
        for (index, model) in models.iter().enumerate() {
            let rank = match leaderboard.last() {
                Some(previous) if previous.entry.total_score == model.total_score => previous.rank,
                _ => (index + 1) as u32,
            };
            leaderboard.push(RankedEntry {
                entry: model_to_entry(model),
                rank,
            });
        }

        Ok(leaderboard)
    }

    pub async fn get_user_rank(&self, user_id: Uuid) -> Result<Option<u32>> {
        let entry = self.find_by_user(user_id).await?;

        if let Some(entry) = entry {
            let users_above = Leaderboard::find()
                .filter(leaderboard::Column::TotalScore.gt(entry.total_score))
                .count(&self.db)
                .await?;

            Ok(Some(users_above as u32 + 1))
        } else {
            Ok(None)
        }
    }
}
