//! Business logic of the game.
//!
//! - `game` - Building, repairing and tearing down a guild's topology, and the roster
//! - `permission` - Overwrite computation from tiers
//! - `dispatch` - Text command and reaction routing
//! - `embed` - Embeds for seed messages and feedback
//! - `lock` - Per-guild serialization

pub mod dispatch;
pub mod embed;
pub mod game;
pub mod lock;
pub mod permission;
