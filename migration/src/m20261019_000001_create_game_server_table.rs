use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameServer::Table)
                    .if_not_exists()
                    .col(pk_auto(GameServer::Id))
                    .col(string_uniq(GameServer::GuildId))
                    .col(boolean(GameServer::Playing).default(false))
                    .col(boolean(GameServer::NeedsCheck).default(false))
                    .col(string(GameServer::EveryoneRoleId))
                    .col(string_null(GameServer::CategoryId))
                    .col(string(GameServer::CategoryName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameServer {
    Table,
    Id,
    GuildId,
    Playing,
    NeedsCheck,
    EveryoneRoleId,
    CategoryId,
    CategoryName,
}
