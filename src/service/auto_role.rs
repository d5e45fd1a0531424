//! Per-guild role assignment for new members.

use serenity::all::{ChannelId, ChannelType, Guild, GuildId, Mentionable, Role, RoleId, UserId};

use crate::{
    data::{AutoRoleRepository, Store},
    model::notice::{Notice, Tone},
};

pub struct AutoRoleService<'a> {
    store: &'a Store,
}

impl<'a> AutoRoleService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Makes `role` the role given to every member who joins the guild.
    ///
    /// Replaces any previously configured role.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being configured
    /// - `role` - Role that exists in that guild
    ///
    /// # Returns
    /// - `Notice` - Confirmation mentioning the role
    pub async fn set(&self, guild_id: GuildId, role: &Role) -> Notice {
        let previous = AutoRoleRepository::new(self.store)
            .set(guild_id, role.id)
            .await;

        tracing::info!(
            "Auto-role for guild {} set to {} (was {:?})",
            guild_id,
            role.id,
            previous
        );

        Notice::titled(
            Tone::Success,
            "✅ Auto-Role Set",
            format!("Auto-role has been set to {}", role.mention()),
        )
    }

    /// Role configured for the guild, if any.
    pub async fn role_for(&self, guild_id: GuildId) -> Option<RoleId> {
        AutoRoleRepository::new(self.store).get(guild_id).await
    }
}

/// Announcement posted after a new member received the auto-role.
pub fn welcome_notice(user_id: UserId, role_name: &str) -> Notice {
    Notice::titled(
        Tone::Success,
        "🎭 Auto-Role Assigned",
        format!(
            "Welcome {}! You have been assigned the {} role.",
            user_id.mention(),
            role_name
        ),
    )
}

/// Picks the channel auto-role announcements go to.
///
/// # Arguments
/// - `guild` - Cached guild the member joined
///
/// # Returns
/// - `Some(ChannelId)` - The guild's system channel, or else the text channel listed
///   first (lowest position, then lowest ID)
/// - `None` - The guild has no system channel and no text channels
pub fn announcement_channel(guild: &Guild) -> Option<ChannelId> {
    guild.system_channel_id.or_else(|| {
        guild
            .channels
            .values()
            .filter(|channel| channel.kind == ChannelType::Text)
            .min_by_key(|channel| (channel.position, channel.id))
            .map(|channel| channel.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        channel::{TEXT, VOICE},
        create_test_channel, create_test_guild, create_test_role,
    };

    /// Tests configuring the auto-role twice.
    ///
    /// Expected: the second role replaces the first
    #[tokio::test]
    async fn setting_replaces_previous_role() {
        let store = Store::new();
        let service = AutoRoleService::new(&store);
        let guild_id = GuildId::new(10);
        let member = create_test_role(11, 10, "Member", 0, 1);
        let player = create_test_role(12, 10, "Player", 0, 2);

        service.set(guild_id, &member).await;
        let notice = service.set(guild_id, &player).await;

        assert_eq!(
            notice.description.as_deref(),
            Some("Auto-role has been set to <@&12>")
        );
        assert_eq!(service.role_for(guild_id).await, Some(RoleId::new(12)));
        assert_eq!(service.role_for(GuildId::new(99)).await, None);
    }

    #[test]
    fn welcome_names_member_and_role() {
        let notice = welcome_notice(UserId::new(7), "Player");
        assert_eq!(
            notice.description.as_deref(),
            Some("Welcome <@7>! You have been assigned the Player role.")
        );
    }

    #[test]
    fn prefers_system_channel() {
        let mut guild = create_test_guild(10, "Universx MC", 1, &[]);
        let general = create_test_channel(21, 10, "general", TEXT, 0);
        guild.channels.insert(general.id, general);
        guild.system_channel_id = Some(ChannelId::new(20));

        assert_eq!(announcement_channel(&guild), Some(ChannelId::new(20)));
    }

    #[test]
    fn falls_back_to_first_text_channel() {
        let mut guild = create_test_guild(10, "Universx MC", 1, &[]);
        for channel in [
            create_test_channel(30, 10, "lounge", VOICE, 0),
            create_test_channel(31, 10, "rules", TEXT, 2),
            create_test_channel(32, 10, "welcome", TEXT, 1),
        ] {
            guild.channels.insert(channel.id, channel);
        }

        assert_eq!(announcement_channel(&guild), Some(ChannelId::new(32)));
    }

    #[test]
    fn no_channel_without_text_channels() {
        let guild = create_test_guild(10, "Universx MC", 1, &[]);
        assert_eq!(announcement_channel(&guild), None);
    }
}
