//! No-prefix permission management.

use serenity::all::{Mentionable, UserId};

use crate::{
    data::{NoPrefixRepository, Store},
    error::{command::CommandError, AppError},
    model::notice::{Notice, Tone},
};

pub struct NoPrefixService<'a> {
    store: &'a Store,
}

impl<'a> NoPrefixService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Lets a user run commands without the command prefix.
    ///
    /// Granting to a user who already holds the permission is a no-op that still
    /// confirms.
    pub async fn grant(&self, user_id: UserId) -> Notice {
        if NoPrefixRepository::new(self.store).grant(user_id).await {
            tracing::info!("Granted no-prefix permission to user {}", user_id);
        }
        Notice::new(Tone::Success).description(format!(
            "Granted no-prefix permission to {}",
            user_id.mention()
        ))
    }

    /// Removes a user's no-prefix permission.
    ///
    /// # Returns
    /// - `Ok(Notice)` - Confirmation
    /// - `Err(AppError::CommandErr(NoPrefixNotHeld))` - The user did not hold it
    pub async fn revoke(&self, user_id: UserId) -> Result<Notice, AppError> {
        if !NoPrefixRepository::new(self.store).revoke(user_id).await {
            return Err(CommandError::NoPrefixNotHeld(user_id).into());
        }
        tracing::info!("Revoked no-prefix permission from user {}", user_id);

        Ok(Notice::new(Tone::Success).description(format!(
            "Revoked no-prefix permission from {}",
            user_id.mention()
        )))
    }

    /// Lists every user holding no-prefix permission.
    pub async fn list(&self) -> Notice {
        let users = NoPrefixRepository::new(self.store).list().await;

        if users.is_empty() {
            return Notice::new(Tone::Info).description("No users have no-prefix permission");
        }

        let mentions = users
            .iter()
            .map(|user| user.mention().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        Notice::new(Tone::Info).description(format!(
            "Users with no-prefix permission:\n{}",
            mentions
        ))
    }
}
