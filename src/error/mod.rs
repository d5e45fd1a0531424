//! Error types and user-facing error reporting.
//!
//! This module provides the bot's error hierarchy and the logic that turns errors into
//! notices. The `AppError` enum is the top-level error type returned by command
//! handlers; the router reports it with `AppError::notice()` so every recoverable error
//! reaches the invoking channel exactly once.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::{
    error::{command::CommandError, config::ConfigError},
    model::notice::Notice,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Command errors carry
/// their own notice, Discord failures map to a generic failure notice, and the
/// remaining variants are faults that are logged rather than shown to users.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only raised before the gateway connection is established, so it never
    /// reaches a channel.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Recoverable user-input or permission error.
    ///
    /// Reported to the invoking channel with the error's own message.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when a remote call is rejected, e.g. the bot
    /// lacks a permission or its role sits below the target's. Reported as a generic
    /// failure notice and not retried.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Unexpected fault with custom message.
    ///
    /// Indicates a bug or an inconsistent cache. Logged at error level; no notice is
    /// sent.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the notice shown to the invoker, if any.
    ///
    /// # Returns
    /// - `Some(Notice)` - For command errors (their own message) and Discord failures
    ///   (a generic failure message)
    /// - `None` - For configuration and internal errors, which are logged instead
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::CommandErr(err) => Some(err.notice()),
            Self::DiscordErr(_) => Some(Notice::error(
                "Discord rejected that action. Make sure I have the required permissions \
                 and that my role is above the target's.",
            )),
            Self::ConfigErr(_) | Self::InternalError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notice::Tone;

    #[test]
    fn command_errors_render_their_message() {
        let err = AppError::from(CommandError::ApplicationNotFound);
        let notice = err.notice().expect("command errors are reported");

        assert_eq!(notice.tone, Tone::Error);
        assert_eq!(
            notice.description.as_deref(),
            Some("No application found for this user.")
        );
    }

    #[test]
    fn missing_permissions_has_dedicated_title() {
        let notice = AppError::from(CommandError::MissingPermissions)
            .notice()
            .unwrap();
        assert_eq!(notice.title.as_deref(), Some("❌ Missing Permissions"));
    }

    #[test]
    fn internal_errors_are_not_shown() {
        let err = AppError::InternalError("guild missing from cache".to_string());
        assert!(err.notice().is_none());
    }
}
