//! Member event handlers.

use serenity::all::{Context, Member};

use crate::{
    bot::outbox,
    data::Store,
    service::auto_role::{self, AutoRoleService},
};

/// Handles a member joining a guild.
///
/// Gives the member the guild's auto-role, if one is configured and still exists, and
/// announces it. Every failure is logged and ends the handler; there is no invoker to
/// report to.
///
/// # Arguments
/// - `store` - Shared bot state holding auto-role settings
/// - `ctx` - Discord context with cache and HTTP client
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(store: &Store, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id;
    let user_id = new_member.user.id;

    let Some(role_id) = AutoRoleService::new(store).role_for(guild_id).await else {
        return;
    };

    // Copy what we need out of the cache before awaiting anything
    let Some((role_name, channel_id)) = ctx.cache.guild(guild_id).and_then(|guild| {
        guild
            .roles
            .get(&role_id)
            .map(|role| (role.name.clone(), auto_role::announcement_channel(&guild)))
    }) else {
        tracing::warn!(
            "Auto-role {} for guild {} no longer exists; skipping",
            role_id,
            guild_id
        );
        return;
    };

    if let Err(e) = new_member.add_role(&ctx.http, role_id).await {
        tracing::error!(
            "Failed to assign auto-role {} to user {} in guild {}: {:?}",
            role_id,
            user_id,
            guild_id,
            e
        );
        return;
    }

    tracing::info!(
        "Assigned auto-role {} to user {} in guild {}",
        role_id,
        user_id,
        guild_id
    );

    let Some(channel_id) = channel_id else {
        tracing::warn!("No channel to announce auto-role in guild {}", guild_id);
        return;
    };

    if let Err(e) = outbox::post(
        &ctx.http,
        channel_id,
        auto_role::welcome_notice(user_id, &role_name),
    )
    .await
    {
        tracing::error!("Failed to announce auto-role in guild {}: {:?}", guild_id, e);
    }
}
