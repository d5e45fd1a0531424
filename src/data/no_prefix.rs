use serenity::all::UserId;

use super::Store;

/// Access to the set of users allowed to run commands without a prefix.
pub struct NoPrefixRepository<'a> {
    store: &'a Store,
}

impl<'a> NoPrefixRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Grants no-prefix permission.
    ///
    /// # Returns
    /// - `true` - Newly granted
    /// - `false` - The user already had it
    pub async fn grant(&self, user_id: UserId) -> bool {
        self.store.tables.write().await.no_prefix.insert(user_id)
    }

    /// Revokes no-prefix permission.
    ///
    /// # Returns
    /// - `true` - Permission was held and has been removed
    /// - `false` - The user did not have it
    pub async fn revoke(&self, user_id: UserId) -> bool {
        self.store.tables.write().await.no_prefix.remove(&user_id)
    }

    pub async fn contains(&self, user_id: UserId) -> bool {
        self.store.tables.read().await.no_prefix.contains(&user_id)
    }

    /// Lists privileged users ordered by ID.
    pub async fn list(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self
            .store
            .tables
            .read()
            .await
            .no_prefix
            .iter()
            .copied()
            .collect();
        users.sort();
        users
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn grant_and_revoke() {
        let store = Store::new();
        let repo = NoPrefixRepository::new(&store);
        let user = UserId::new(41);

        assert!(repo.grant(user).await);
        assert!(!repo.grant(user).await);
        assert!(repo.contains(user).await);

        assert!(repo.revoke(user).await);
        assert!(!repo.revoke(user).await);
        assert!(!repo.contains(user).await);
    }

    #[tokio::test]
    async fn list_is_sorted() {
        let store = Store::new();
        let repo = NoPrefixRepository::new(&store);
        repo.grant(UserId::new(9)).await;
        repo.grant(UserId::new(3)).await;

        assert_eq!(repo.list().await, vec![UserId::new(3), UserId::new(9)]);
    }
}
