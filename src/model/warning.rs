//! Moderation warnings.

use chrono::{DateTime, Utc};

/// A warning issued to a member by a moderator.
///
/// Warnings never expire; a member accumulates them in the order issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    /// Moderator-supplied reason, if any.
    pub reason: Option<String>,
    /// When the warning was issued.
    pub issued_at: DateTime<Utc>,
}

impl Warning {
    /// Creates a warning stamped with the current time.
    ///
    /// Blank reasons are treated as no reason.
    pub fn new(reason: Option<&str>) -> Self {
        Self {
            reason: reason
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            issued_at: Utc::now(),
        }
    }

    /// Reason text for display, falling back to a placeholder.
    pub fn reason_or_default(&self) -> &str {
        self.reason.as_deref().unwrap_or(NO_REASON)
    }
}

/// Placeholder shown when a moderation action carries no reason.
pub const NO_REASON: &str = "No reason provided";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reason_becomes_none() {
        let warning = Warning::new(Some("   "));
        assert_eq!(warning.reason, None);
        assert_eq!(warning.reason_or_default(), NO_REASON);
    }

    #[test]
    fn reason_is_trimmed() {
        let warning = Warning::new(Some(" spamming invites "));
        assert_eq!(warning.reason_or_default(), "spamming invites");
    }
}
