mod bot;
mod config;
mod data;
mod error;
mod model;
mod platform;
mod service;
mod startup;

#[cfg(test)]
mod testing;

use dioxus_logger::tracing::{self, Level};
use std::sync::Arc;

use crate::{config::Config, error::AppError, model::template::Template};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;

    let template = Template::load(&config.template_path)?;
    tracing::info!(
        "Loaded template {} with {} roles and {} channels",
        config.template_path,
        template.roles.len(),
        template.channels.len()
    );

    let db = startup::connect_to_database(&config).await?;
    startup::flag_games_for_check(&db).await?;

    let client = bot::start::init_bot(&config, db, Arc::new(template)).await?;
    bot::start::start_bot(client).await?;

    tracing::info!("Bot stopped");

    Ok(())
}
