//! Domain models for membership applications.
//!
//! An application is the record produced by a completed intake questionnaire.
//! Only completed questionnaires are ever stored; the reviewer later attaches a
//! free-form status to it.

use chrono::{DateTime, Utc};
use serenity::all::UserId;
use std::fmt;

/// Review status of an application.
///
/// Reviewers may type any word as a status, so this is an uninterpreted label rather
/// than a closed enum. The label is case-folded on construction so `Accepted`,
/// `ACCEPTED` and `accepted` are stored identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStatus(String);

impl ApplicationStatus {
    /// Status assigned to every freshly submitted application.
    pub const PENDING: &'static str = "pending";
    pub const ACCEPTED: &'static str = "accepted";
    pub const REJECTED: &'static str = "rejected";

    /// Creates a status from reviewer input, case-folding it.
    ///
    /// # Arguments
    /// - `label` - Free-form status text typed by the reviewer
    ///
    /// # Returns
    /// - `ApplicationStatus` - The lowercased status label
    pub fn new(label: &str) -> Self {
        Self(label.to_lowercase())
    }

    pub fn pending() -> Self {
        Self(Self::PENDING.to_string())
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_accepted(&self) -> bool {
        self.0 == Self::ACCEPTED
    }

    pub fn is_rejected(&self) -> bool {
        self.0 == Self::REJECTED
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed membership application.
///
/// Exactly one application is kept per respondent; a later successful intake from the
/// same respondent replaces the earlier record.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    /// Discord ID of the user who answered the questionnaire.
    pub respondent: UserId,
    /// Answers in question order, one per question.
    pub answers: Vec<String>,
    /// When the last answer was received.
    pub submitted_at: DateTime<Utc>,
    /// Current review status, `pending` until a reviewer decides.
    pub status: ApplicationStatus,
}

impl Application {
    /// Creates a pending application stamped with the current time.
    ///
    /// # Arguments
    /// - `respondent` - Discord ID of the applicant
    /// - `answers` - Collected answers in question order
    ///
    /// # Returns
    /// - `Application` - New application with `pending` status
    pub fn submit(respondent: UserId, answers: Vec<String>) -> Self {
        Self {
            respondent,
            answers,
            submitted_at: Utc::now(),
            status: ApplicationStatus::pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_case_folded() {
        let status = ApplicationStatus::new("Accepted");
        assert_eq!(status.as_str(), "accepted");
        assert!(status.is_accepted());
        assert!(!status.is_rejected());
    }

    #[test]
    fn arbitrary_status_is_kept_verbatim_apart_from_case() {
        let status = ApplicationStatus::new("On Hold");
        assert_eq!(status.to_string(), "on hold");
        assert!(!status.is_accepted());
    }

    #[test]
    fn submitted_application_is_pending() {
        let before = Utc::now();
        let application = Application::submit(UserId::new(42), vec!["Steve".to_string()]);

        assert_eq!(application.status, ApplicationStatus::pending());
        assert!(application.submitted_at >= before);
        assert_eq!(application.answers, vec!["Steve".to_string()]);
    }
}
