//! Boundary between services and the chat platform.
//!
//! Services never talk to Discord directly. They send notices through an `Outbox`
//! and wait for user replies through a `ReplySource`, both provided by the bot layer.
//! Tests substitute recording fakes.

use serenity::all::{ChannelId, UserId};
use serenity::async_trait;
use std::time::Duration;

use crate::{error::AppError, model::notice::Notice};

/// Sends notices to channels and users.
///
/// Each call either delivers its notice or fails as a whole; failures are not retried.
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Posts a notice in a channel.
    async fn send(&self, channel_id: ChannelId, notice: Notice) -> Result<(), AppError>;

    /// Sends a notice to a user's direct messages.
    async fn send_direct(&self, user_id: UserId, notice: Notice) -> Result<(), AppError>;
}

/// Waits for the next message from a specific user in a specific channel.
#[async_trait]
pub trait ReplySource: Send + Sync {
    /// Waits until `respondent` posts in `channel_id` or `timeout` elapses.
    ///
    /// Messages from other authors or other channels are skipped and do not restart
    /// the deadline. Whatever listener the implementation registers is released when
    /// this returns, on either outcome.
    ///
    /// # Arguments
    /// - `respondent` - Author whose message is awaited
    /// - `channel_id` - Channel the message must be posted in
    /// - `timeout` - How long to wait, measured from the call
    ///
    /// # Returns
    /// - `Some(String)` - Content of the first matching message
    /// - `None` - The deadline elapsed first
    async fn next_reply(
        &self,
        respondent: UserId,
        channel_id: ChannelId,
        timeout: Duration,
    ) -> Option<String>;
}
