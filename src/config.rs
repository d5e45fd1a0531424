use serenity::all::UserId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "u!";
const DEFAULT_ACTIVITY: &str = "Universx MC | u!help";

pub struct Config {
    pub discord_bot_token: String,

    /// User allowed to run owner-only commands.
    pub owner_id: UserId,

    pub command_prefix: String,
    pub activity: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let owner_id = std::env::var("BOT_OWNER_ID")
            .map_err(|_| ConfigError::MissingEnvVar("BOT_OWNER_ID".to_string()))?;

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            owner_id: parse_user_id("BOT_OWNER_ID", &owner_id)?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .ok()
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            activity: std::env::var("BOT_ACTIVITY")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY.to_string()),
        })
    }
}

/// Parses a non-zero Discord ID from an environment variable value.
///
/// # Arguments
/// - `name` - Variable name, used in the error
/// - `value` - Raw variable value
///
/// # Returns
/// - `Ok(UserId)` - Parsed ID
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a non-zero integer
fn parse_user_id(name: &str, value: &str) -> Result<UserId, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}
