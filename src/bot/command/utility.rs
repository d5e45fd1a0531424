use std::time::Duration;

use serenity::all::Context;

use super::Invocation;
use crate::{bot::start::ShardManagerContainer, error::AppError, service::info, util::parse};

pub async fn ping(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let latency = shard_latency(invocation.ctx).await;
    invocation.reply(info::ping_notice(latency)).await?;
    Ok(())
}

pub async fn server_info(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let guild_id = invocation.guild_id()?;

    let notice = {
        let guild = invocation.ctx.cache.guild(guild_id).ok_or_else(|| {
            AppError::InternalError(format!("Guild {} missing from cache", guild_id))
        })?;
        info::server_info_notice(&guild)
    };

    invocation.reply(notice).await?;
    Ok(())
}

pub async fn user_info(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, _) = parse::split_first(args);
    let member = invocation.member_or_author(target).await?;
    let roles = invocation.guild_roles().await?;

    invocation
        .reply(info::user_info_notice(&member, &roles))
        .await?;
    Ok(())
}

/// Heartbeat latency of the shard the context belongs to.
///
/// # Returns
/// - `Some(Duration)` - Last measured round trip
/// - `None` - No heartbeat acknowledged yet, or the shard manager is not registered
async fn shard_latency(ctx: &Context) -> Option<Duration> {
    let shard_manager = {
        let data = ctx.data.read().await;
        data.get::<ShardManagerContainer>()?.clone()
    };

    let runners = shard_manager.runners.lock().await;
    runners.get(&ctx.shard_id)?.latency
}
