//! Profile badges.

use std::fmt;
use std::str::FromStr;

use crate::error::command::CommandError;

/// A profile badge from the fixed badge vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Badge {
    Owner,
    Staff,
    Admin,
}

impl Badge {
    /// Every grantable badge, in display order.
    pub const ALL: [Badge; 3] = [Badge::Owner, Badge::Staff, Badge::Admin];

    /// Text shown on profiles when a user holds no badge.
    pub const NONE_DISPLAY: &'static str = "❌ No Badge";

    /// The key used in commands, e.g. `grant_badge @user staff`.
    pub fn key(self) -> &'static str {
        match self {
            Badge::Owner => "owner",
            Badge::Staff => "staff",
            Badge::Admin => "admin",
        }
    }

    /// Display name with icon, as rendered on profiles.
    pub fn display_name(self) -> &'static str {
        match self {
            Badge::Owner => "👑 Owner",
            Badge::Staff => "🛡️ Staff",
            Badge::Admin => "⚡ Admin",
        }
    }

    /// Comma separated list of valid keys for error messages.
    pub fn available_keys() -> String {
        Self::ALL
            .iter()
            .map(|badge| badge.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses a badge key case-insensitively.
impl FromStr for Badge {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|badge| badge.key() == key)
            .ok_or(CommandError::InvalidBadge {
                given: s.to_string(),
                available: Self::available_keys(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("staff".parse::<Badge>().unwrap(), Badge::Staff);
        assert_eq!("OWNER".parse::<Badge>().unwrap(), Badge::Owner);
        assert_eq!(" Admin ".parse::<Badge>().unwrap(), Badge::Admin);
    }

    #[test]
    fn rejects_keys_outside_vocabulary() {
        let err = "moderator".parse::<Badge>().unwrap_err();
        match err {
            CommandError::InvalidBadge { given, available } => {
                assert_eq!(given, "moderator");
                assert_eq!(available, "owner, staff, admin");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn no_badge_is_not_grantable() {
        assert!("no_badge".parse::<Badge>().is_err());
    }
}
