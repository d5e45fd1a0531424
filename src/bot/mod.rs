//! Discord gateway integration.
//!
//! This module connects the services to Discord: it receives gateway events, turns
//! messages into command invocations, and renders service notices as embeds.
//!
//! - `start` - Client construction and the gateway loop
//! - `handler` - Event handlers for ready, message, and member join events
//! - `router` - Prefix resolution, permission checks, and error reporting
//! - `command` - The command table and one handler per command
//! - `outbox` - Serenity implementations of the service boundary traits
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, role, and channel cache used for permissions and lookups
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Receive messages that may be commands
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//! - `GUILD_MEMBERS` - Receive member join events for auto-roles (privileged intent)
//! - `GUILD_MODERATION` - Ban and unban events
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod command;
pub mod handler;
pub mod outbox;
pub mod router;
pub mod start;
