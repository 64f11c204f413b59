//! Knights of Discord Test Utils
//!
//! Provides shared testing utilities for the bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases holding the
//! mirror tables, factories for inserting mirror rows, and factories for serenity
//! objects as Discord would deliver them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_mirror_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_game_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
