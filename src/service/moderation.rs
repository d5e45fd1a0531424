//! Moderation rules and notices.
//!
//! The kick, ban, unban, and purge calls themselves are made by the bot layer; this
//! service owns the warning ledger, the ban-list lookup, and the wording of every
//! moderation notice.

use serenity::all::{Ban, Mentionable, MessageId, User, UserId};

use crate::{
    data::{Store, WarningRepository},
    model::{
        notice::{Notice, Tone},
        warning::{Warning, NO_REASON},
    },
    util::{format, parse},
};

pub struct ModerationService<'a> {
    store: &'a Store,
}

impl<'a> ModerationService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Records a warning against a member.
    ///
    /// # Arguments
    /// - `user_id` - Warned member
    /// - `reason` - Free text reason; blank text is stored as no reason
    ///
    /// # Returns
    /// - `Notice` - Confirmation including the reason or "No reason provided"
    pub async fn warn(&self, user_id: UserId, reason: Option<&str>) -> Notice {
        let warning = Warning::new(reason);
        let total = WarningRepository::new(self.store)
            .append(user_id, warning.clone())
            .await;

        tracing::info!("Warned user {} ({} warnings total)", user_id, total);

        Notice::titled(
            Tone::Warning,
            "⚠️ Member Warned",
            format!(
                "{} has been warned\nReason: {}",
                user_id.mention(),
                warning.reason_or_default()
            ),
        )
    }

    /// Lists a member's warnings, oldest first.
    pub async fn warnings(&self, user_id: UserId) -> Notice {
        let warnings = WarningRepository::new(self.store).list(user_id).await;

        if warnings.is_empty() {
            return Notice::titled(
                Tone::Success,
                "📋 Warnings",
                format!("{} has no warnings.", user_id.mention()),
            );
        }

        let lines = warnings
            .iter()
            .enumerate()
            .map(|(index, warning)| {
                format!(
                    "**{}.** {} ({})",
                    index + 1,
                    warning.reason_or_default(),
                    format::date_time(&warning.issued_at)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Notice::titled(
            Tone::Warning,
            "📋 Warnings",
            format!("Warnings for {}:\n{}", user_id.mention(), lines),
        )
        .footer(format!("{} total", warnings.len()))
    }
}

pub fn kicked_notice(user_id: UserId, reason: Option<&str>) -> Notice {
    Notice::titled(
        Tone::Caution,
        "👢 Member Kicked",
        format!(
            "{} has been kicked\nReason: {}",
            user_id.mention(),
            reason_text(reason)
        ),
    )
}

pub fn banned_notice(user_id: UserId, reason: Option<&str>) -> Notice {
    Notice::titled(
        Tone::Error,
        "🔨 Member Banned",
        format!(
            "{} has been banned\nReason: {}",
            user_id.mention(),
            reason_text(reason)
        ),
    )
}

pub fn unbanned_notice(user_id: UserId) -> Notice {
    Notice::titled(
        Tone::Success,
        "🔓 Member Unbanned",
        format!("{} has been unbanned", user_id.mention()),
    )
}

pub fn cleared_notice(amount: u8) -> Notice {
    Notice::titled(
        Tone::Info,
        "🧹 Messages Cleared",
        format!("Cleared {} messages", amount),
    )
}

/// Oldest message Discord accepts in a bulk delete, less a minute for clock skew.
const BULK_DELETE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60 - 60;

/// Splits messages by whether Discord still allows deleting them in bulk.
///
/// # Arguments
/// - `message_ids` - Messages to delete
/// - `now` - Current Unix time in seconds
///
/// # Returns
/// - `(recent, stale)` - Bulk-deletable messages, and those that must be deleted one
///   at a time; both keep the input order
pub fn partition_by_bulk_age(
    message_ids: &[MessageId],
    now: i64,
) -> (Vec<MessageId>, Vec<MessageId>) {
    message_ids
        .iter()
        .copied()
        .partition(|id| now - id.created_at().unix_timestamp() < BULK_DELETE_MAX_AGE_SECS)
}

fn reason_text(reason: Option<&str>) -> &str {
    reason.and_then(parse::non_empty).unwrap_or(NO_REASON)
}

/// Finds the banned user an unban target refers to.
///
/// The target may be a mention, a raw ID, a `name#discriminator` tag, or a bare
/// username. Tags and names are compared exactly.
///
/// # Arguments
/// - `bans` - The guild's ban list
/// - `query` - Target as typed by the invoker
///
/// # Returns
/// - `Some(&User)` - First ban entry matching the target
/// - `None` - No entry matches
pub fn find_banned_user<'b>(bans: &'b [Ban], query: &str) -> Option<&'b User> {
    let query = query.trim();
    let by_id = parse::parse_user(query);

    bans.iter()
        .map(|ban| &ban.user)
        .find(|user| match by_id {
            Some(id) => user.id == id,
            None => matches_tag(user, query),
        })
}

fn matches_tag(user: &User, query: &str) -> bool {
    match query.rsplit_once('#') {
        Some((name, discriminator)) => {
            let user_discriminator = user
                .discriminator
                .map(|d| format!("{:04}", d.get()))
                .unwrap_or_else(|| "0".to_string());
            user.name == name && user_discriminator == discriminator
        }
        None => user.name == query,
    }
}
