//! Membership application flows.
//!
//! - `intake` - The multi-turn questionnaire that produces an `Application`
//! - `review` - Marking a stored application with a reviewer's decision
//!
//! Both flows send their own notices through an `Outbox` because they emit more than
//! one message per invocation. Precondition failures (an intake already running, no
//! application to review) are returned as `CommandError`s and reported by the caller.

pub mod intake;
pub mod review;

#[cfg(test)]
mod test;

pub use intake::{IntakeFlow, IntakeOutcome};
pub use review::ReviewFlow;

use std::time::Duration;

/// Questions asked by the intake questionnaire, in order.
pub const QUESTIONS: [&str; 4] = [
    "What is your Minecraft username? 🎮",
    "How old are you? 🎂",
    "Why do you want to join our server? 🤔",
    "Do you agree to follow our rules? 📜",
];

/// How long the respondent has to answer each question.
///
/// The deadline restarts for every question.
pub const QUESTION_TIMEOUT: Duration = Duration::from_secs(60);
