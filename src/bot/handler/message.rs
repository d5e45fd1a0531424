//! Message event handler: the command entry point.

use serenity::all::{Context, Message};

use crate::{
    bot::{
        command::{self, Invocation},
        outbox,
        router::{self, Route},
    },
    config::Config,
    data::Store,
};

/// Routes a message to the command it invokes, if any.
///
/// Messages from bots, including this one, are never treated as commands. A command
/// that fails is reported to its channel by `router::report`; nothing here retries.
///
/// # Arguments
/// - `store` - Shared bot state
/// - `config` - Bot configuration (prefix, owner)
/// - `ctx` - Discord context for the event
/// - `message` - The received message
pub async fn handle_message(store: &Store, config: &Config, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let literal = config.command_prefix.as_str();
    let effective = router::effective_prefix(store, literal, message.author.id).await;
    let bot_id = ctx.cache.current_user().id;

    let (spec, args) = match router::route(&message.content, literal, effective, bot_id) {
        Route::Dispatch { spec, args } => (spec, args),
        Route::NotFound => {
            let notice = router::not_found_notice(literal);
            if let Err(e) = outbox::post(&ctx.http, message.channel_id, notice).await {
                tracing::warn!("Failed to send command-not-found notice: {:?}", e);
            }
            return;
        }
        Route::Ignore => return,
    };

    tracing::debug!(
        "User {} invoked {} in channel {}",
        message.author.id,
        spec.name,
        message.channel_id
    );

    let invocation = Invocation {
        ctx: &ctx,
        msg: &message,
        store,
        config,
        spec,
    };

    let result = match router::authorize(&invocation).await {
        Ok(()) => command::execute(&invocation, args).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        router::report(&invocation, e).await;
    }
}
