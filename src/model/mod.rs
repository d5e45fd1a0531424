//! Domain models shared by the data, service, and bot layers.
//!
//! These types carry no Discord client state: IDs are plain Serenity snowflake
//! newtypes and user-facing output is a platform-neutral `Notice`.

pub mod application;
pub mod badge;
pub mod notice;
pub mod warning;
