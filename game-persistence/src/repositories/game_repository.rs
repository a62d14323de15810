use anyhow::{Result, anyhow};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::warn;
use uuid::Uuid;

use crate::entities::{games, guesses, prelude::*};
use crate::repositories::leaderboard_repository::apply_completion;
use game_core::GameCompletion;
use game_types::{GameState, GameStatus, GuessFeedback, GuessRecord};

pub struct GameRepository {
    db: DatabaseConnection,
}

fn parse_timestamp(value: &str) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(value).unwrap_or_else(|_| chrono::Utc::now().into())
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_state(model: games::Model) -> Result<GameState> {
        let status = GameStatus::parse(&model.status)
            .ok_or_else(|| anyhow!("Unknown game status '{}' for game {}", model.status, model.id))?;

        Ok(GameState {
            id: model.id,
            user_id: model.user_id,
            target_block: model.target_block,
            status,
            attempts_remaining: model.attempts_remaining,
            score: model.score,
            created_at: model.created_at.to_rfc3339(),
        })
    }

    fn model_to_guess(model: guesses::Model) -> Result<GuessRecord> {
        let feedback: GuessFeedback = serde_json::from_value(model.feedback)?;

        Ok(GuessRecord {
            id: model.id,
            game_id: model.game_id,
            user_id: model.user_id,
            guessed_block: model.guessed_block,
            is_correct: model.is_correct,
            feedback,
            attempt_number: model.attempt_number,
            created_at: model.created_at.to_rfc3339(),
        })
    }

    pub async fn create_game(&self, game: &GameState) -> Result<GameState> {
        let created_at = parse_timestamp(&game.created_at);

        let game_model = games::ActiveModel {
            id: ActiveValue::Set(game.id),
            user_id: ActiveValue::Set(game.user_id),
            target_block: ActiveValue::Set(game.target_block.clone()),
            status: ActiveValue::Set(game.status.as_str().to_string()),
            attempts_remaining: ActiveValue::Set(game.attempts_remaining),
            score: ActiveValue::Set(game.score),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        let saved = Games::insert(game_model).exec(&self.db).await?;

        // Fetch the created game
        let created = Games::find_by_id(saved.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow!("Failed to retrieve created game"))?;

        Self::model_to_state(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GameState>> {
        Games::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Self::model_to_state)
            .transpose()
    }

    /// Most recently created active game of a user
    pub async fn find_active_for_user(&self, user_id: Uuid) -> Result<Option<GameState>> {
        Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::Status.eq(GameStatus::Active.as_str()))
            .order_by_desc(games::Column::CreatedAt)
            .one(&self.db)
            .await?
            .map(Self::model_to_state)
            .transpose()
    }

    /// Guesses of a game in the order they were made
    pub async fn list_guesses(&self, game_id: Uuid) -> Result<Vec<GuessRecord>> {
        Guesses::find()
            .filter(guesses::Column::GameId.eq(game_id))
            .order_by_asc(guesses::Column::AttemptNumber)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Self::model_to_guess)
            .collect()
    }

    pub async fn previous_hints(&self, game_id: Uuid) -> Result<Vec<String>> {
        let guesses = self.list_guesses(game_id).await?;
        Ok(guesses.into_iter().map(|g| g.feedback.hint).collect())
    }

    /// Persist one guess atomically: the game transition, the guess row and,
    /// when the game just ended, the leaderboard entry.
    ///
    /// The game row is only updated if it still matches `previous` (same
    /// owner, still active, same attempts). Returns `None` when another
    /// submission got there first; nothing is written in that case.
    pub async fn record_guess(
        &self,
        previous: &GameState,
        updated: &GameState,
        guess: &GuessRecord,
        completion: Option<GameCompletion>,
    ) -> Result<Option<GameState>> {
        let txn = self.db.begin().await?;
        let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();

        let result = Games::update_many()
            .col_expr(
                games::Column::AttemptsRemaining,
                Expr::value(updated.attempts_remaining),
            )
            .col_expr(games::Column::Status, Expr::value(updated.status.as_str()))
            .col_expr(games::Column::Score, Expr::value(updated.score))
            .col_expr(games::Column::UpdatedAt, Expr::value(now))
            .filter(games::Column::Id.eq(previous.id))
            .filter(games::Column::UserId.eq(previous.user_id))
            .filter(games::Column::Status.eq(GameStatus::Active.as_str()))
            .filter(games::Column::AttemptsRemaining.eq(previous.attempts_remaining))
            .exec(&txn)
            .await?;

        if result.rows_affected != 1 {
            warn!(
                game_id = %previous.id,
                "Game changed before the guess could be recorded"
            );
            txn.rollback().await?;
            return Ok(None);
        }

        let guess_model = guesses::ActiveModel {
            id: ActiveValue::Set(guess.id),
            game_id: ActiveValue::Set(guess.game_id),
            user_id: ActiveValue::Set(guess.user_id),
            guessed_block: ActiveValue::Set(guess.guessed_block.clone()),
            is_correct: ActiveValue::Set(guess.is_correct),
            feedback: ActiveValue::Set(serde_json::to_value(&guess.feedback)?),
            attempt_number: ActiveValue::Set(guess.attempt_number),
            created_at: ActiveValue::Set(parse_timestamp(&guess.created_at)),
        };
        Guesses::insert(guess_model).exec(&txn).await?;

        if let Some(completion) = completion {
            apply_completion(&txn, updated.user_id, completion).await?;
        }

        txn.commit().await?;
        Ok(Some(updated.clone()))
    }
}
