//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating what Discord's API would return.

use serenity::all::{Guild, Role};

/// Creates a test Serenity Guild with customizable fields.
///
/// Creates a Guild object by deserializing JSON with the provided values.
/// The guild has no channels, members, or icon. All other fields are set to
/// reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `owner_id` - Discord user ID of the guild owner
/// - `roles` - Roles defined in the guild
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_guild, create_test_role};
///
/// let staff = create_test_role(111111111, 123456789, "Staff", 0x00FF00, 5);
/// let guild = create_test_guild(123456789, "Universx MC", 100000000000000000, &[staff]);
/// assert_eq!(guild.roles.len(), 1);
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, owner_id: u64, roles: &[Role]) -> Guild {
    let roles: Vec<serde_json::Value> = roles
        .iter()
        .map(|role| serde_json::to_value(role).expect("Failed to serialize test role"))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_id": null,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
