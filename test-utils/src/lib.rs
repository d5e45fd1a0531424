//! Universx Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. The bot keeps no
//! database, so the only fixtures needed are Discord API objects: command handlers
//! and notice builders take Serenity structs (users, members, roles, guilds, bans)
//! as input, and building those by hand is verbose because most of their fields are
//! private or require valid snowflakes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_user};
//!
//! #[tokio::test]
//! async fn renders_profile() {
//!     let user = create_test_user(123456789, "steve", false);
//!     let member = create_test_member(987654321, &user, &[], "2024-01-01T00:00:00.000000+00:00");
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
