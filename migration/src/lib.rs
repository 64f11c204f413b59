pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_game_server_table;
mod m20261019_000002_create_game_role_table;
mod m20261019_000003_create_game_channel_table;
mod m20261019_000004_create_game_channel_overwrite_table;
mod m20261019_000005_create_game_message_table;
mod m20261019_000006_create_game_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_game_server_table::Migration),
            Box::new(m20261019_000002_create_game_role_table::Migration),
            Box::new(m20261019_000003_create_game_channel_table::Migration),
            Box::new(m20261019_000004_create_game_channel_overwrite_table::Migration),
            Box::new(m20261019_000005_create_game_message_table::Migration),
            Box::new(m20261019_000006_create_game_user_table::Migration),
        ]
    }
}
