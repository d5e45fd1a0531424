//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member, Role, Guild, GuildChannel, Ban) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_ban, create_test_role, create_test_user};
//!
//! #[test]
//! fn finds_banned_user() {
//!     let user = create_test_user(111111111, "griefer", false);
//!     let bans = vec![create_test_ban(&user, Some("spam"))];
//!
//!     let staff = create_test_role(222222222, 333333333, "Staff", 0x00FF00, 5);
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `ban::create_test_ban` - Create Serenity Ban entries

pub mod ban;
pub mod channel;
pub mod guild;
pub mod member;
pub mod role;
pub mod user;

pub use ban::create_test_ban;
pub use channel::create_test_channel;
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::{create_test_user, create_test_user_with_discriminator};
