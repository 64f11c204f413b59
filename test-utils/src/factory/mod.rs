//! Factories inserting mirror rows with sensible defaults.
//!
//! ```rust,ignore
//! use test_utils::factory::game_server::GameServerFactory;
//!
//! let server = GameServerFactory::new(&db)
//!     .guild_id(42)
//!     .playing(true)
//!     .build()
//!     .await?;
//! ```

pub mod game_server;
pub mod game_user;
pub mod helpers;
