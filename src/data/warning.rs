use serenity::all::UserId;

use super::Store;
use crate::model::warning::Warning;

/// Access to the warnings issued to each member.
pub struct WarningRepository<'a> {
    store: &'a Store,
}

impl<'a> WarningRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Appends a warning to a member's history.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the warned member
    /// - `warning` - The warning to record
    ///
    /// # Returns
    /// - `usize` - Total number of warnings the member now has
    pub async fn append(&self, user_id: UserId, warning: Warning) -> usize {
        let mut tables = self.store.tables.write().await;
        let history = tables.warnings.entry(user_id).or_default();
        history.push(warning);
        history.len()
    }

    /// Lists a member's warnings in the order they were issued.
    pub async fn list(&self, user_id: UserId) -> Vec<Warning> {
        self.store
            .tables
            .read()
            .await
            .warnings
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }
}
