//! Prefix resolution, command lookup, authorization, and error reporting.
//!
//! A message invokes a command when it starts with one of:
//! - a mention of the bot, e.g. `<@123> ping`
//! - the literal prefix, e.g. `u!ping`
//! - nothing at all, for users holding no-prefix permission
//!
//! Mentions and the literal prefix are explicit invocations: an unknown command name
//! gets a "Command Not Found" notice. Prefix-less messages are implicit, so an unknown
//! first word is treated as ordinary chat and ignored.

use serenity::all::UserId;

use crate::{
    bot::command::{find, CommandSpec, Invocation, Requirement},
    data::{NoPrefixRepository, Store},
    error::{command::CommandError, AppError},
    model::notice::{Notice, Tone},
};

/// Outcome of matching a message against the command table.
#[derive(Debug, PartialEq)]
pub enum Route<'a> {
    /// Run `spec` with the argument text that followed the command name.
    Dispatch {
        spec: &'static CommandSpec,
        args: &'a str,
    },
    /// An explicit invocation named no known command.
    NotFound,
    /// Not a command.
    Ignore,
}

/// Prefix that applies to messages from `sender`.
///
/// # Arguments
/// - `store` - State store holding the no-prefix set
/// - `literal` - The configured literal prefix
/// - `sender` - Author of the message
///
/// # Returns
/// - `""` - The sender holds no-prefix permission
/// - `literal` - Everyone else
pub async fn effective_prefix<'a>(store: &Store, literal: &'a str, sender: UserId) -> &'a str {
    if NoPrefixRepository::new(store).contains(sender).await {
        ""
    } else {
        literal
    }
}

/// Matches message content against the command table.
///
/// # Arguments
/// - `content` - Raw message text
/// - `literal` - The configured literal prefix, always accepted
/// - `effective` - The sender's effective prefix from `effective_prefix`
/// - `bot_id` - The bot's own user ID, for mention invocations
///
/// # Returns
/// - `Route` - What the message asks for
pub fn route<'a>(content: &'a str, literal: &str, effective: &str, bot_id: UserId) -> Route<'a> {
    let mention = format!("<@{}>", bot_id);
    let nick_mention = format!("<@!{}>", bot_id);

    let (rest, explicit) = if let Some(rest) = content
        .strip_prefix(mention.as_str())
        .or_else(|| content.strip_prefix(nick_mention.as_str()))
    {
        (rest.trim_start(), true)
    } else if let Some(rest) = content.strip_prefix(literal) {
        (rest, true)
    } else if effective.is_empty() {
        (content, false)
    } else {
        return Route::Ignore;
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    if name.is_empty() {
        return Route::Ignore;
    }

    match find(name) {
        Some(spec) => Route::Dispatch { spec, args },
        None if explicit => Route::NotFound,
        None => Route::Ignore,
    }
}

/// Notice for an explicit invocation of an unknown command.
pub fn not_found_notice(prefix: &str) -> Notice {
    Notice::titled(
        Tone::Error,
        "❌ Command Not Found",
        format!("Use `{}help` to see available commands.", prefix),
    )
}

/// Checks the invoker against the command's permission predicate.
///
/// Guild permissions are computed from the cached guild, so channel overwrites are
/// not considered.
///
/// # Returns
/// - `Ok(())` - The invoker may run the command
/// - `Err(CommandError::MissingPermissions)` - The predicate failed
/// - `Err(CommandError::GuildOnly)` - A permission-gated command was used in a DM
/// - `Err(AppError)` - The invoker's member record or the guild could not be loaded
pub async fn authorize(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let requirement = invocation.spec.requirement;
    let is_owner = invocation.msg.author.id == invocation.config.owner_id;

    let permissions = match requirement {
        Requirement::Permissions(_) => {
            let guild_id = invocation.guild_id()?;
            let member = invocation.msg.member(invocation.ctx).await?;

            let permissions = invocation
                .ctx
                .cache
                .guild(guild_id)
                .map(|guild| guild.member_permissions(&member));

            Some(permissions.ok_or_else(|| {
                AppError::InternalError(format!("Guild {} missing from cache", guild_id))
            })?)
        }
        Requirement::Everyone | Requirement::Owner => None,
    };

    if requirement.is_met(is_owner, permissions) {
        Ok(())
    } else {
        Err(CommandError::MissingPermissions.into())
    }
}

/// Reports a failed command to its channel and the log.
///
/// Sends at most one notice. Failing to send it is logged and otherwise ignored.
pub async fn report(invocation: &Invocation<'_>, error: AppError) {
    let name = invocation.spec.name;

    match &error {
        AppError::CommandErr(e) => {
            tracing::debug!("Command {} rejected: {}", name, e);
        }
        AppError::DiscordErr(e) => {
            tracing::warn!("Command {} failed at Discord: {:?}", name, e);
        }
        AppError::ConfigErr(e) => {
            tracing::error!("Command {} hit a configuration error: {}", name, e);
        }
        AppError::InternalError(e) => {
            tracing::error!("Command {} failed: {}", name, e);
        }
    }

    if let Some(notice) = error.notice() {
        if let Err(e) = invocation.reply(notice).await {
            tracing::error!("Failed to report error for command {}: {:?}", name, e);
        }
    }
}
