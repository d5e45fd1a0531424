//! Serenity implementations of the service boundary traits.

use std::{sync::Arc, time::Duration};

use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Http, Message, ShardMessenger,
    UserId,
};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::notice::Notice,
    service::outbox::{Outbox, ReplySource},
};

/// Renders a notice as a Discord embed.
///
/// # Arguments
/// - `notice` - Notice to render
///
/// # Returns
/// - `CreateEmbed` - Embed with the notice's colour, text, fields, thumbnail, and footer
pub fn render(notice: Notice) -> CreateEmbed {
    let mut embed = CreateEmbed::new().color(notice.tone.colour());

    if let Some(title) = notice.title {
        embed = embed.title(title);
    }
    if let Some(description) = notice.description {
        embed = embed.description(description);
    }
    for field in notice.fields {
        embed = embed.field(field.name, field.value, field.inline);
    }
    if let Some(url) = notice.thumbnail {
        embed = embed.thumbnail(url);
    }
    if let Some(footer) = notice.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    embed
}

/// Posts a notice as an embed in a channel.
///
/// # Returns
/// - `Ok(Message)` - The posted message, e.g. for later deletion
/// - `Err(AppError::DiscordErr)` - Discord rejected the message
pub async fn post(http: &Http, channel_id: ChannelId, notice: Notice) -> Result<Message, AppError> {
    let message = channel_id
        .send_message(http, CreateMessage::new().embed(render(notice)))
        .await?;
    Ok(message)
}

/// Sends notices through Serenity's HTTP client.
pub struct SerenityOutbox {
    http: Arc<Http>,
}

impl SerenityOutbox {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Outbox for SerenityOutbox {
    async fn send(&self, channel_id: ChannelId, notice: Notice) -> Result<(), AppError> {
        post(&self.http, channel_id, notice).await?;
        Ok(())
    }

    async fn send_direct(&self, user_id: UserId, notice: Notice) -> Result<(), AppError> {
        user_id
            .direct_message(&self.http, CreateMessage::new().embed(render(notice)))
            .await?;
        Ok(())
    }
}

/// Waits for replies with a gateway message collector.
pub struct CollectorReplies {
    shard: ShardMessenger,
}

impl CollectorReplies {
    pub fn new(shard: ShardMessenger) -> Self {
        Self { shard }
    }
}

#[async_trait]
impl ReplySource for CollectorReplies {
    async fn next_reply(
        &self,
        respondent: UserId,
        channel_id: ChannelId,
        timeout: Duration,
    ) -> Option<String> {
        // The collector's listener is removed when it is dropped at the end of this call
        channel_id
            .await_reply(&self.shard)
            .filter(move |message| {
                is_reply_from(message.author.id, message.channel_id, respondent, channel_id)
            })
            .timeout(timeout)
            .await
            .map(|message| message.content)
    }
}

/// Whether a message counts as the respondent's answer.
///
/// Messages from anyone else, or in any other channel, are skipped. Skipped messages
/// leave the collector's single deadline untouched.
///
/// # Arguments
/// - `author` - Author of the incoming message
/// - `channel` - Channel the incoming message was posted in
/// - `respondent` - User the questionnaire is waiting on
/// - `channel_id` - Channel the questionnaire runs in
fn is_reply_from(
    author: UserId,
    channel: ChannelId,
    respondent: UserId,
    channel_id: ChannelId,
) -> bool {
    author == respondent && channel == channel_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notice::Tone;

    #[test]
    fn renders_every_part_of_a_notice() {
        let notice = Notice::titled(Tone::Success, "✅ Auto-Role Set", "done")
            .field("Role", "<@&1>", true)
            .footer("footer");

        let embed = serde_json::to_value(render(notice)).unwrap();

        assert_eq!(embed["title"], "✅ Auto-Role Set");
        assert_eq!(embed["description"], "done");
        assert_eq!(embed["color"], 0x2ECC71);
        assert_eq!(embed["fields"][0]["name"], "Role");
        assert_eq!(embed["fields"][0]["inline"], true);
        assert_eq!(embed["footer"]["text"], "footer");
    }

    #[test]
    fn only_the_respondent_in_the_intake_channel_answers() {
        let respondent = UserId::new(10);
        let channel = ChannelId::new(20);

        assert!(is_reply_from(respondent, channel, respondent, channel));
        assert!(!is_reply_from(UserId::new(11), channel, respondent, channel));
        assert!(!is_reply_from(respondent, ChannelId::new(21), respondent, channel));
        assert!(!is_reply_from(UserId::new(11), ChannelId::new(21), respondent, channel));
    }
}
