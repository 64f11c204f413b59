//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services and startup code. Event
//! handlers log it and carry on; only startup failures end the process.

pub mod config;
pub mod platform;

use thiserror::Error;

use crate::error::{config::ConfigError, platform::PlatformError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration or template error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// A failed write can leave the mirror out of step with the live guild
    /// until the next repair of the affected object.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord gateway call failed or an expected object was missing.
    #[error(transparent)]
    PlatformErr(#[from] PlatformError),

    /// Discord client error from Serenity.
    ///
    /// Boxed due to large size. Only produced while starting the client.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
