use std::time::Duration;

use serenity::all::{GetMessages, Timestamp};

use super::Invocation;
use crate::{
    error::{command::CommandError, AppError},
    service::moderation::{self, ModerationService},
    util::parse,
};

/// How long the purge confirmation stays visible.
const CLEAR_CONFIRMATION_TTL: Duration = Duration::from_secs(3);

pub async fn kick(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, reason) = parse::split_first(args);
    let target = target.ok_or_else(|| invocation.missing_argument())?;
    let member = invocation.resolve_member(target).await?;
    let reason = parse::non_empty(reason);

    match reason {
        Some(reason) => member.kick_with_reason(invocation.ctx, reason).await?,
        None => member.kick(invocation.ctx).await?,
    }

    tracing::info!(
        "{} kicked {} from guild {}",
        invocation.msg.author.id,
        member.user.id,
        member.guild_id
    );

    invocation
        .reply(moderation::kicked_notice(member.user.id, reason))
        .await?;
    Ok(())
}

pub async fn ban(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, reason) = parse::split_first(args);
    let target = target.ok_or_else(|| invocation.missing_argument())?;
    let member = invocation.resolve_member(target).await?;
    let reason = parse::non_empty(reason);

    match reason {
        Some(reason) => member.ban_with_reason(invocation.ctx, 0, reason).await?,
        None => member.ban(invocation.ctx, 0).await?,
    }

    tracing::info!(
        "{} banned {} from guild {}",
        invocation.msg.author.id,
        member.user.id,
        member.guild_id
    );

    invocation
        .reply(moderation::banned_notice(member.user.id, reason))
        .await?;
    Ok(())
}

pub async fn unban(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let guild_id = invocation.guild_id()?;
    let query = parse::non_empty(args).ok_or_else(|| invocation.missing_argument())?;

    // Without a limit Discord returns up to 1000 entries
    let bans = guild_id.bans(&invocation.ctx.http, None, None).await?;

    let user = moderation::find_banned_user(&bans, query).ok_or(CommandError::BanNotFound)?;

    guild_id.unban(&invocation.ctx.http, user.id).await?;

    tracing::info!(
        "{} unbanned {} from guild {}",
        invocation.msg.author.id,
        user.id,
        guild_id
    );

    invocation
        .reply(moderation::unbanned_notice(user.id))
        .await?;
    Ok(())
}

/// Deletes the command message and the `amount` messages before it.
///
/// Messages too old for Discord's bulk delete are removed one at a time. The
/// confirmation is removed again after a few seconds; failing to remove it is logged
/// and not reported.
pub async fn clear(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    invocation.guild_id()?;
    let (amount, _) = parse::split_first(args);
    let amount = parse::parse_count(amount.ok_or_else(|| invocation.missing_argument())?)?;

    let channel_id = invocation.msg.channel_id;
    let http = &invocation.ctx.http;

    let mut message_ids: Vec<_> = channel_id
        .messages(http, GetMessages::new().before(invocation.msg.id).limit(amount))
        .await?
        .into_iter()
        .map(|message| message.id)
        .collect();
    message_ids.push(invocation.msg.id);

    let (recent, stale) =
        moderation::partition_by_bulk_age(&message_ids, Timestamp::now().unix_timestamp());

    match recent.as_slice() {
        [] => {}
        [id] => channel_id.delete_message(http, *id).await?,
        ids => channel_id.delete_messages(http, ids).await?,
    }

    if !stale.is_empty() {
        tracing::debug!(
            "Deleting {} messages older than the bulk delete limit in channel {}",
            stale.len(),
            channel_id
        );
    }
    for id in stale {
        channel_id.delete_message(http, id).await?;
    }

    tracing::info!(
        "{} cleared {} messages in channel {}",
        invocation.msg.author.id,
        message_ids.len() - 1,
        channel_id
    );

    let confirmation = invocation
        .reply(moderation::cleared_notice(amount))
        .await?;

    tokio::time::sleep(CLEAR_CONFIRMATION_TTL).await;

    if let Err(e) = confirmation.delete(invocation.ctx).await {
        tracing::warn!("Failed to delete clear confirmation: {:?}", e);
    }

    Ok(())
}

pub async fn warn(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, reason) = parse::split_first(args);
    let target = target.ok_or_else(|| invocation.missing_argument())?;
    let member = invocation.resolve_member(target).await?;

    let notice = ModerationService::new(invocation.store)
        .warn(member.user.id, parse::non_empty(reason))
        .await;

    invocation.reply(notice).await?;
    Ok(())
}

pub async fn warnings(invocation: &Invocation<'_>, args: &str) -> Result<(), AppError> {
    let (target, _) = parse::split_first(args);
    let member = invocation.member_or_author(target).await?;

    let notice = ModerationService::new(invocation.store)
        .warnings(member.user.id)
        .await;

    invocation.reply(notice).await?;
    Ok(())
}
