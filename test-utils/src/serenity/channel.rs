//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Discord channel type value for a guild text channel.
pub const TEXT: u8 = 0;
/// Discord channel type value for a guild voice channel.
pub const VOICE: u8 = 2;

/// Creates a test Serenity GuildChannel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `kind` - Discord channel type value, e.g. `TEXT` or `VOICE`
/// - `position` - Sorting position in the channel list
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
