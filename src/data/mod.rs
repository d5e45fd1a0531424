//! In-memory state store and per-table repositories.
//!
//! The bot keeps no persistent state: warnings, badges, auto-role settings, no-prefix
//! grants and applications live for the lifetime of the process. `Store` owns all of
//! them behind a single lock and is created by the process entry point, then handed
//! to the event handler. Repositories borrow the store and expose the primitive
//! operations for one table each, mirroring how a database-backed repository layer
//! would be split.
//!
//! Serenity dispatches gateway events on concurrent tasks, so every access goes
//! through the lock. Repository methods never hold the lock across an `.await` on
//! anything but the lock itself.

pub mod application;
pub mod auto_role;
pub mod badge;
pub mod no_prefix;
pub mod warning;

pub use application::ApplicationRepository;
pub use auto_role::AutoRoleRepository;
pub use badge::BadgeRepository;
pub use no_prefix::NoPrefixRepository;
pub use warning::WarningRepository;

use serenity::all::{GuildId, RoleId, UserId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{application::Application, badge::Badge, warning::Warning};

/// All mutable bot state.
#[derive(Default)]
struct Tables {
    warnings: HashMap<UserId, Vec<Warning>>,
    badges: HashMap<UserId, BTreeSet<Badge>>,
    auto_roles: HashMap<GuildId, RoleId>,
    no_prefix: HashSet<UserId>,
    applications: HashMap<UserId, Application>,
    /// Respondents whose intake questionnaire is currently running.
    intakes_in_flight: HashSet<UserId>,
}

/// Shared handle to the bot's in-memory state.
///
/// Cloning is cheap and every clone refers to the same tables. Tests create a fresh
/// store per case with `Store::new()`.
#[derive(Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
