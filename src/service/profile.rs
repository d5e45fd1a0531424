//! Profiles and badge management.

use serenity::all::{Mentionable, Timestamp, User, UserId};

use crate::{
    data::{BadgeRepository, NoPrefixRepository, Store},
    error::{command::CommandError, AppError},
    model::{
        badge::Badge,
        notice::{Notice, Tone},
    },
    util::format,
};

pub struct ProfileService<'a> {
    store: &'a Store,
}

impl<'a> ProfileService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Grants a badge to a user.
    ///
    /// Badge keys are matched case-insensitively. Granting a badge the user already
    /// holds leaves the set unchanged and still confirms.
    ///
    /// # Arguments
    /// - `user_id` - Recipient of the badge
    /// - `key` - Badge key as typed, e.g. `staff`
    ///
    /// # Returns
    /// - `Ok(Notice)` - Confirmation naming the badge
    /// - `Err(AppError::CommandErr(InvalidBadge))` - Key outside the badge vocabulary;
    ///   nothing changed
    pub async fn grant_badge(&self, user_id: UserId, key: &str) -> Result<Notice, AppError> {
        let badge: Badge = key.parse()?;

        if BadgeRepository::new(self.store).grant(user_id, badge).await {
            tracing::info!("Granted badge {} to user {}", badge.key(), user_id);
        }

        Ok(Notice::new(Tone::Success).description(format!(
            "Granted {} to {}",
            badge.display_name(),
            user_id.mention()
        )))
    }

    /// Revokes a badge from a user.
    ///
    /// # Arguments
    /// - `user_id` - Holder of the badge
    /// - `key` - Badge key as typed
    ///
    /// # Returns
    /// - `Ok(Notice)` - Confirmation naming the badge
    /// - `Err(AppError::CommandErr(BadgeNotHeld))` - The user does not hold that badge,
    ///   including keys outside the vocabulary; nothing changed
    pub async fn revoke_badge(&self, user_id: UserId, key: &str) -> Result<Notice, AppError> {
        let badge: Badge = key
            .parse()
            .map_err(|_| CommandError::BadgeNotHeld(user_id))?;

        if !BadgeRepository::new(self.store).revoke(user_id, badge).await {
            return Err(CommandError::BadgeNotHeld(user_id).into());
        }
        tracing::info!("Revoked badge {} from user {}", badge.key(), user_id);

        Ok(Notice::new(Tone::Success).description(format!(
            "Revoked {} from {}",
            badge.display_name(),
            user_id.mention()
        )))
    }

    /// Builds a user's profile card.
    ///
    /// # Arguments
    /// - `user` - The profiled user
    /// - `joined_at` - When the user joined the guild, if known
    /// - `colour` - Colour of the user's top role, if any
    ///
    /// # Returns
    /// - `Notice` - Profile with ID, join date, badges, and no-prefix status
    pub async fn profile(
        &self,
        user: &User,
        joined_at: Option<Timestamp>,
        colour: Option<u32>,
    ) -> Notice {
        let badges = BadgeRepository::new(self.store).list(user.id).await;
        let no_prefix = NoPrefixRepository::new(self.store).contains(user.id).await;

        let badge_display = if badges.is_empty() {
            Badge::NONE_DISPLAY.to_string()
        } else {
            badges
                .iter()
                .map(|badge| badge.display_name())
                .collect::<Vec<_>>()
                .join("\n")
        };

        let no_prefix_status = if no_prefix {
            "✅ Enabled"
        } else {
            "❌ Disabled"
        };

        Notice::new(colour.map(Tone::Colour).unwrap_or(Tone::Info))
            .title(format!("Profile - {}", user.tag()))
            .thumbnail(Some(user.face()))
            .field("🆔 User ID", user.id.to_string(), true)
            .field(
                "📅 Joined",
                joined_at
                    .map(format::date)
                    .unwrap_or_else(|| "Unknown".to_string()),
                true,
            )
            .field("🏅 Badges", badge_display, false)
            .field("🔑 No-Prefix Status", no_prefix_status, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_user;

    /// Tests granting a badge with a key outside the vocabulary.
    ///
    /// Expected: Err(InvalidBadge) and no badge stored
    #[tokio::test]
    async fn invalid_badge_is_rejected() {
        let store = Store::new();
        let user = UserId::new(50);

        let result = ProfileService::new(&store).grant_badge(user, "legend").await;

        assert!(matches!(
            result,
            Err(AppError::CommandErr(CommandError::InvalidBadge { .. }))
        ));
        assert!(BadgeRepository::new(&store).list(user).await.is_empty());
    }

    /// Tests granting the same badge twice.
    ///
    /// Expected: both succeed, badge stored once
    #[tokio::test]
    async fn granting_twice_keeps_one_badge() {
        let store = Store::new();
        let service = ProfileService::new(&store);
        let user = UserId::new(51);

        let notice = service.grant_badge(user, "Staff").await.unwrap();
        service.grant_badge(user, "staff").await.unwrap();

        assert_eq!(
            notice.description.as_deref(),
            Some("Granted 🛡️ Staff to <@51>")
        );
        assert_eq!(
            BadgeRepository::new(&store).list(user).await,
            vec![Badge::Staff]
        );
    }

    /// Tests revoking a badge the user does not hold.
    ///
    /// Expected: Err(BadgeNotHeld) with the "does not have" message, state unchanged
    #[tokio::test]
    async fn revoking_unheld_badge_reports_does_not_have() {
        let store = Store::new();
        let service = ProfileService::new(&store);
        let user = UserId::new(52);
        service.grant_badge(user, "admin").await.unwrap();

        let err = service.revoke_badge(user, "owner").await.unwrap_err();

        assert_eq!(
            err.notice().unwrap().description.as_deref(),
            Some("<@52> does not have this badge")
        );
        assert_eq!(
            BadgeRepository::new(&store).list(user).await,
            vec![Badge::Admin]
        );
    }

    /// Tests revoking a held badge.
    ///
    /// Expected: Ok and the badge removed
    #[tokio::test]
    async fn revoking_held_badge() {
        let store = Store::new();
        let service = ProfileService::new(&store);
        let user = UserId::new(53);
        service.grant_badge(user, "owner").await.unwrap();

        let notice = service.revoke_badge(user, "OWNER").await.unwrap();

        assert_eq!(
            notice.description.as_deref(),
            Some("Revoked 👑 Owner from <@53>")
        );
        assert!(BadgeRepository::new(&store).list(user).await.is_empty());
    }

    /// Tests the profile card of a user without badges or no-prefix permission.
    ///
    /// Expected: "No Badge" and "Disabled"
    #[tokio::test]
    async fn profile_without_badges() {
        let store = Store::new();
        let user = create_test_user(54, "steve", false);

        let notice = ProfileService::new(&store).profile(&user, None, None).await;

        assert_eq!(notice.field_value("🆔 User ID"), Some("54"));
        assert_eq!(notice.field_value("📅 Joined"), Some("Unknown"));
        assert_eq!(notice.field_value("🏅 Badges"), Some(Badge::NONE_DISPLAY));
        assert_eq!(notice.field_value("🔑 No-Prefix Status"), Some("❌ Disabled"));
        assert_eq!(notice.tone, Tone::Info);
    }

    /// Tests the profile card of a privileged user with badges.
    ///
    /// Expected: badge display names one per line and "Enabled"
    #[tokio::test]
    async fn profile_with_badges_and_no_prefix() {
        let store = Store::new();
        let user = create_test_user(55, "alex", false);
        let service = ProfileService::new(&store);
        service.grant_badge(user.id, "admin").await.unwrap();
        service.grant_badge(user.id, "owner").await.unwrap();
        NoPrefixRepository::new(&store).grant(user.id).await;
        let joined = Timestamp::from_unix_timestamp(1_714_567_890).unwrap();

        let notice = service.profile(&user, Some(joined), Some(0xFF0000)).await;

        assert_eq!(notice.field_value("🏅 Badges"), Some("👑 Owner\n⚡ Admin"));
        assert_eq!(notice.field_value("🔑 No-Prefix Status"), Some("✅ Enabled"));
        assert_eq!(notice.field_value("📅 Joined"), Some("2024-05-01"));
        assert_eq!(notice.tone, Tone::Colour(0xFF0000));
    }
}
