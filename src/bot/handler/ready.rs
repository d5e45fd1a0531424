//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. This is the
//! first event received after authentication and indicates the bot is ready to
//! process other events.

use serenity::all::{ActivityData, Context, Ready};

use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// Fires once per gateway session, including after reconnects, so the presence is
/// restored every time.
///
/// # Arguments
/// - `config` - Bot configuration holding the presence text
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::playing(config.activity.as_str())));
}
