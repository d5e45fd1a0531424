use serenity::all::{RoleId, UserId};
use serenity::utils::{parse_role_mention, parse_user_mention};

use crate::error::command::CommandError;

/// Largest number of messages `clear` removes in one call.
///
/// Discord's bulk delete accepts at most 100 messages, one of which is the command
/// message itself.
pub const MAX_CLEAR_AMOUNT: u8 = 99;

/// Parses a non-zero u64 ID from a string.
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Some(u64)` - Successfully parsed, non-zero ID
/// - `None` - Not an integer, or zero
pub fn parse_id(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

/// Resolves a user argument given as a mention (`<@id>`, `<@!id>`) or a raw ID.
pub fn parse_user(value: &str) -> Option<UserId> {
    parse_user_mention(value.trim()).or_else(|| parse_id(value).map(UserId::new))
}

/// Resolves a role argument given as a mention (`<@&id>`) or a raw ID.
pub fn parse_role(value: &str) -> Option<RoleId> {
    parse_role_mention(value.trim()).or_else(|| parse_id(value).map(RoleId::new))
}

/// Parses the number of messages to purge.
///
/// # Arguments
/// - `value` - Amount as typed by the invoker
///
/// # Returns
/// - `Ok(u8)` - Amount in `1..=MAX_CLEAR_AMOUNT`
/// - `Err(CommandError::InvalidCount)` - Not an integer, or out of range
pub fn parse_count(value: &str) -> Result<u8, CommandError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|amount| (1..=MAX_CLEAR_AMOUNT).contains(amount))
        .ok_or_else(|| CommandError::InvalidCount(value.trim().to_string()))
}

/// Splits raw argument text into its first word and the trimmed remainder.
///
/// # Returns
/// - `(None, "")` - The text is blank
/// - `(Some(first), rest)` - `rest` is empty when there is only one word
pub fn split_first(args: &str) -> (Option<&str>, &str) {
    let args = args.trim();
    if args.is_empty() {
        return (None, "");
    }
    match args.split_once(char::is_whitespace) {
        Some((first, rest)) => (Some(first), rest.trim()),
        None => (Some(args), ""),
    }
}

/// Returns `None` for blank text, the trimmed text otherwise.
pub fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}
