use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{config::Config, data::game_server::GameServerRepository, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Flags every stored game for an integrity check.
///
/// Drift that happened while the bot was offline produced no events, so each
/// playing guild is compared against its mirror once it becomes available.
pub async fn flag_games_for_check(db: &DatabaseConnection) -> Result<(), AppError> {
    let flagged = GameServerRepository::new(db)
        .flag_all_unchecked(true)
        .await?;

    tracing::info!("Flagged {} games for an integrity check", flagged);

    Ok(())
}
