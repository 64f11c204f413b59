//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's gateway would deliver, so event conversion code can be tested
//! without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_guild, create_test_role};
//!
//! let knight = create_test_role(111, "knight", 0);
//! let castle = create_test_channel(222, 1, "castle", Some(333), 4, vec![]);
//! let guild = create_test_guild(1, "Test Guild", 100, vec![knight], vec![castle]);
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod guild;
pub mod role;

pub use channel::{create_test_channel, role_overwrite_json};
pub use guild::create_test_guild;
pub use role::create_test_role;
