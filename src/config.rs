use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!kod-";
const DEFAULT_TEMPLATE_PATH: &str = "structure.json";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Prefix every text command starts with, e.g. `!kod-help`.
    pub command_prefix: String,
    /// Path to the JSON template describing the game topology.
    pub template_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
            template_path: std::env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| DEFAULT_TEMPLATE_PATH.to_string()),
        })
    }
}
