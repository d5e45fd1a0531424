//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User using the current (discriminator-less) username format.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `bot` - Whether the account is a bot account
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, bot: bool) -> User {
    build_user(user_id, username, "0", bot)
}

/// Creates a test Serenity User with a legacy `name#1234` discriminator.
///
/// Legacy accounts are still returned by the ban list endpoint for users that were
/// banned before the username migration, so lookups need to handle both formats.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Username without the discriminator
/// - `discriminator` - Four digit discriminator, e.g. `"0420"`
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
pub fn create_test_user_with_discriminator(user_id: u64, username: &str, discriminator: &str) -> User {
    build_user(user_id, username, discriminator, false)
}

fn build_user(user_id: u64, username: &str, discriminator: &str, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": discriminator,
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "banner": null,
        "accent_color": null,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
