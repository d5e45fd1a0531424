use serenity::all::UserId;

use super::Store;
use crate::model::badge::Badge;

/// Access to the badges held by each user.
pub struct BadgeRepository<'a> {
    store: &'a Store,
}

impl<'a> BadgeRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Adds a badge to a user's set.
    ///
    /// # Returns
    /// - `true` - The badge was newly added
    /// - `false` - The user already held it; the set is unchanged
    pub async fn grant(&self, user_id: UserId, badge: Badge) -> bool {
        self.store
            .tables
            .write()
            .await
            .badges
            .entry(user_id)
            .or_default()
            .insert(badge)
    }

    /// Removes a badge from a user's set.
    ///
    /// # Returns
    /// - `true` - The badge was held and has been removed
    /// - `false` - The user did not hold it; nothing changed
    pub async fn revoke(&self, user_id: UserId, badge: Badge) -> bool {
        let mut tables = self.store.tables.write().await;
        let Some(badges) = tables.badges.get_mut(&user_id) else {
            return false;
        };
        let removed = badges.remove(&badge);
        if badges.is_empty() {
            tables.badges.remove(&user_id);
        }
        removed
    }

    /// Lists a user's badges in display order.
    pub async fn list(&self, user_id: UserId) -> Vec<Badge> {
        self.store
            .tables
            .read()
            .await
            .badges
            .get(&user_id)
            .map(|badges| badges.iter().copied().collect())
            .unwrap_or_default()
    }
}
