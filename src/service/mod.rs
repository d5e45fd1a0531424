//! Business logic between the bot layer and the state store.
//!
//! Services take the store and plain IDs or Serenity models, apply the bot's rules,
//! and describe the result as `Notice`s. They never call the Discord API themselves;
//! anything that must reach the platform goes through the `outbox` traits.

pub mod application;
pub mod auto_role;
pub mod info;
pub mod moderation;
pub mod no_prefix;
pub mod outbox;
pub mod profile;

#[cfg(test)]
pub mod fake;
