//! Discord gateway glue for the game.
//!
//! The bot receives guild, role, channel, message and reaction events, converts
//! the serenity payloads into platform values and hands them to the game
//! services. Every handler takes the guild's lock before touching its mirror.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability plus role and channel create/update/delete
//! - `GUILD_MESSAGES` - Text commands
//! - `GUILD_MESSAGE_REACTIONS` - The join reaction on the rules message
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be enabled in the
//! Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
