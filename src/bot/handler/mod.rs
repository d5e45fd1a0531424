use std::sync::Arc;

use serenity::all::{Context, EventHandler, Member, Message, Ready};
use serenity::async_trait;

use crate::{config::Config, data::Store};

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub store: Store,
    pub config: Arc<Config>,
}

impl Handler {
    pub fn new(store: Store, config: Arc<Config>) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.store, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.store, &self.config, ctx, message).await;
    }
}
