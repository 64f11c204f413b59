//! SeaORM entities for the persisted game mirror.
//!
//! One `game_server` row exists per Discord guild hosting a game; every other
//! table hangs off it through `guild_id` and is removed with it.

pub mod prelude;

pub mod game_channel;
pub mod game_channel_overwrite;
pub mod game_message;
pub mod game_role;
pub mod game_server;
pub mod game_user;
