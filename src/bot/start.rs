use std::sync::Arc;

use serenity::all::{Client, GatewayIntents, ShardManager};
use serenity::prelude::TypeMapKey;

use crate::{bot::handler::Handler, config::Config, data::Store, error::AppError};

/// Type map key under which the client's shard manager is registered.
///
/// Commands read it to look up the heartbeat latency of their shard.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Bot configuration; the token is used here and the rest is shared with
///   the handler
/// - `store` - State store shared with the handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to `start_bot`
/// - `Err(AppError)` - The client could not be built, e.g. a malformed token
pub async fn init_bot(config: Config, store: Store) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - must be enabled in
    // the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::DIRECT_MESSAGES;

    let token = config.discord_bot_token.clone();
    let handler = Handler::new(store, Arc::new(config));

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
    }

    Ok(client)
}

/// Runs the client until it stops or the process receives Ctrl+C.
///
/// # Arguments
/// - `client` - Client from `init_bot`
///
/// # Returns
/// - `Ok(())` - The client shut down
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received, stopping Discord client...");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    // Blocks until all shards are stopped
    client.start().await?;

    tracing::info!("Discord bot stopped");
    Ok(())
}
