//! Test factory for creating Serenity Ban entries.

use serenity::all::{Ban, User};

/// Creates a ban list entry as returned by the guild bans endpoint.
///
/// # Arguments
/// - `user` - The banned user
/// - `reason` - Optional audit log reason attached to the ban
///
/// # Returns
/// - `Ban` - A valid Serenity Ban struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Ban (indicates invalid test data)
pub fn create_test_ban(user: &User, reason: Option<&str>) -> Ban {
    serde_json::from_value(serde_json::json!({
        "reason": reason,
        "user": serde_json::to_value(user).expect("Failed to serialize test user"),
    }))
    .expect("Failed to create test ban - invalid JSON structure")
}
