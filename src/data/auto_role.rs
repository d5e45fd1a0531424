use serenity::all::{GuildId, RoleId};

use super::Store;

/// Access to the per-guild auto-role setting.
pub struct AutoRoleRepository<'a> {
    store: &'a Store,
}

impl<'a> AutoRoleRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Sets the role given to new members of a guild.
    ///
    /// # Returns
    /// - `Some(RoleId)` - The previously configured role, now replaced
    /// - `None` - The guild had no auto-role before
    pub async fn set(&self, guild_id: GuildId, role_id: RoleId) -> Option<RoleId> {
        self.store
            .tables
            .write()
            .await
            .auto_roles
            .insert(guild_id, role_id)
    }

    pub async fn get(&self, guild_id: GuildId) -> Option<RoleId> {
        self.store
            .tables
            .read()
            .await
            .auto_roles
            .get(&guild_id)
            .copied()
    }
}
