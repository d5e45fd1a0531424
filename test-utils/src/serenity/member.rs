//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, User};

/// Creates a test Serenity Member for the given user.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the membership belongs to
/// - `user` - The user this membership wraps
/// - `role_ids` - Role IDs held by the member (the @everyone role is implicit)
/// - `joined_at` - RFC 3339 timestamp of when the member joined
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user: &User, role_ids: &[u64], joined_at: &str) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": serde_json::to_value(user).expect("Failed to serialize test user"),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": joined_at,
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
