use serenity::all::UserId;
use thiserror::Error;

use crate::model::notice::{Notice, Tone};

/// Recoverable errors caused by how a command was invoked.
///
/// Each variant is reported to the invoking channel as a single notice and the
/// handler returns normally; none of these are logged above debug level.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was not supplied.
    #[error("Missing argument. Usage: `{usage}`")]
    MissingArgument {
        /// Usage line of the command, including the prefix
        usage: String,
    },

    /// The member argument did not resolve to a member of this guild.
    #[error("Could not find a member matching `{0}`.")]
    MemberNotFound(String),

    /// The role argument did not resolve to a role of this guild.
    #[error("Could not find a role matching `{0}`.")]
    RoleNotFound(String),

    /// The message count for a purge was not an integer in range.
    #[error("`{0}` is not a valid amount. Use a whole number from 1 to 99.")]
    InvalidCount(String),

    /// The badge key is not part of the badge vocabulary.
    #[error("Invalid badge `{given}`. Available badges: {available}")]
    InvalidBadge {
        /// Key as typed by the invoker
        given: String,
        /// Comma separated list of valid keys
        available: String,
    },

    /// Revoking a badge the member does not hold.
    #[error("<@{0}> does not have this badge")]
    BadgeNotHeld(UserId),

    /// Revoking no-prefix permission from a member who does not hold it.
    #[error("<@{0}> does not have no-prefix permission")]
    NoPrefixNotHeld(UserId),

    /// Reviewing a user who never completed an application.
    #[error("No application found for this user.")]
    ApplicationNotFound,

    /// The respondent already has an intake questionnaire running.
    #[error("You already have an application in progress. Finish answering it first.")]
    IntakeInProgress,

    /// No entry in the guild ban list matches the unban target.
    #[error("Member not found in ban list")]
    BanNotFound,

    /// Command that needs a guild was used in a direct message.
    #[error("This command can only be used in a server.")]
    GuildOnly,

    /// The invoker fails the command's permission predicate.
    #[error("You do not have the required permissions to use this command.")]
    MissingPermissions,
}

impl CommandError {
    /// Builds the notice reported to the invoking channel.
    ///
    /// # Returns
    /// - `Notice` - Red notice titled "❌ Missing Permissions" for permission failures
    ///   and "❌ Error" for everything else
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingPermissions => {
                Notice::titled(Tone::Error, "❌ Missing Permissions", self.to_string())
            }
            _ => Notice::error(self.to_string()),
        }
    }
}
