//! Domain models shared by the bot, services and repositories.
//!
//! - `template` - Static desired topology loaded from configuration
//! - `mirror` - Per-guild record of the topology actually created
//! - `platform` - Snapshots and settings exchanged with Discord

pub mod mirror;
pub mod platform;
pub mod template;
