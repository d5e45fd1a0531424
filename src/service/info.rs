//! Informational lookups: latency, server and member details.
//!
//! Everything here is a pure function of cached Serenity models, so these notices
//! are built without touching the store.

use std::{collections::HashMap, time::Duration};

use serenity::all::{ChannelType, Guild, Member, Mentionable, Role, RoleId};

use crate::{
    model::notice::{Notice, Tone},
    util::format,
};

/// Builds the latency report.
///
/// # Arguments
/// - `latency` - Last measured gateway heartbeat round trip, `None` before the first
///   heartbeat was acknowledged
pub fn ping_notice(latency: Option<Duration>) -> Notice {
    let latency = latency
        .map(|latency| format!("{}ms", latency.as_millis()))
        .unwrap_or_else(|| "unknown".to_string());

    Notice::titled(Tone::Info, "🏓 Pong!", format!("Latency: {}", latency))
}

/// Builds the server overview for `guild`.
pub fn server_info_notice(guild: &Guild) -> Notice {
    let count_channels = |kind: ChannelType| {
        guild
            .channels
            .values()
            .filter(|channel| channel.kind == kind)
            .count()
    };

    Notice::new(Tone::Info)
        .title(format!("📊 {} Server Information", guild.name))
        .thumbnail(guild.icon_url())
        .field("👑 Owner", guild.owner_id.mention().to_string(), true)
        .field("👥 Members", guild.member_count.to_string(), true)
        .field("📅 Created At", format::date(guild.id.created_at()), true)
        .field(
            "💬 Text Channels",
            count_channels(ChannelType::Text).to_string(),
            true,
        )
        .field(
            "🔊 Voice Channels",
            count_channels(ChannelType::Voice).to_string(),
            true,
        )
        .field("🎭 Roles", guild.roles.len().to_string(), true)
}

/// Builds the member overview.
///
/// # Arguments
/// - `member` - Member being described
/// - `guild_roles` - Roles of the member's guild, used to order the member's roles
///   and pick the top one
///
/// # Returns
/// - `Notice` - Coloured with the member's display colour when they have one
pub fn user_info_notice(member: &Member, guild_roles: &HashMap<RoleId, Role>) -> Notice {
    let roles = member_roles(member, guild_roles);

    let top_role = roles
        .first()
        .map(|role| role.mention().to_string())
        .unwrap_or_else(|| "None".to_string());

    let role_list = if roles.is_empty() {
        "None".to_string()
    } else {
        roles
            .iter()
            .map(|role| role.mention().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let tone = display_colour(member, guild_roles)
        .map(Tone::Colour)
        .unwrap_or(Tone::Info);

    Notice::new(tone)
        .title(format!("👤 User Information - {}", member.user.tag()))
        .thumbnail(member.user.avatar_url())
        .field("🆔 ID", member.user.id.to_string(), true)
        .field(
            "📅 Joined",
            member
                .joined_at
                .map(format::date)
                .unwrap_or_else(|| "Unknown".to_string()),
            true,
        )
        .field("📝 Created At", format::date(member.user.id.created_at()), true)
        .field("👑 Top Role", top_role, true)
        .field("🎭 Roles", role_list, false)
        .field("🤖 Bot", if member.user.bot { "Yes" } else { "No" }, true)
}

/// Colour of the member's highest coloured role, as Discord displays their name.
pub fn display_colour(member: &Member, guild_roles: &HashMap<RoleId, Role>) -> Option<u32> {
    member_roles(member, guild_roles)
        .into_iter()
        .map(|role| role.colour.0)
        .find(|colour| *colour != 0)
}

/// The member's roles, highest first. Roles missing from `guild_roles` are skipped.
fn member_roles<'r>(member: &Member, guild_roles: &'r HashMap<RoleId, Role>) -> Vec<&'r Role> {
    let mut roles: Vec<&Role> = member
        .roles
        .iter()
        .filter_map(|role_id| guild_roles.get(role_id))
        .collect();
    roles.sort_by(|a, b| b.position.cmp(&a.position).then(a.id.cmp(&b.id)));
    roles
}
