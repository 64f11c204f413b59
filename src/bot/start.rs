use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::{
    bot::handler::Handler, config::Config, error::AppError, model::template::Template,
};

/// Builds the Discord client with the game's event handler.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and prefix
/// - `db` - Database connection for the mirror store
/// - `template` - Validated game template shared by every handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    template: Arc<Template>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db, template, config.command_prefix.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord bot until it disconnects or Ctrl-C is received.
///
/// Ctrl-C shuts every shard down; handlers still in flight are not awaited.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
///
/// # Returns
/// - `Ok(())` - The bot shut down
/// - `Err(AppError::DiscordErr)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Shutdown requested, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
