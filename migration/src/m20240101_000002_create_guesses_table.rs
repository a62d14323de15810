use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_games_table::Games;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guesses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Guesses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Guesses::GameId).uuid().not_null())
                    .col(ColumnDef::new(Guesses::UserId).uuid().not_null())
                    .col(ColumnDef::new(Guesses::GuessedBlock).string().not_null())
                    .col(ColumnDef::new(Guesses::IsCorrect).boolean().not_null())
                    .col(ColumnDef::new(Guesses::Feedback).json().not_null())
                    .col(ColumnDef::new(Guesses::AttemptNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Guesses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guesses_game_id")
                            .from(Guesses::Table, Guesses::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per attempt; a duplicated submission cannot record twice
        manager
            .create_index(
                Index::create()
                    .name("idx_guesses_game_attempt")
                    .table(Guesses::Table)
                    .col(Guesses::GameId)
                    .col(Guesses::AttemptNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guesses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Guesses {
    Table,
    Id,
    GameId,
    UserId,
    GuessedBlock,
    IsCorrect,
    Feedback,
    AttemptNumber,
    CreatedAt,
}
