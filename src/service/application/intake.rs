//! Intake questionnaire.
//!
//! Asks a fixed list of questions one at a time in the channel where `apply` was
//! used, waiting for the respondent's reply to each. A missed deadline on any question
//! abandons the whole questionnaire: collected answers are dropped and nothing is
//! stored. Only a fully answered questionnaire becomes an `Application`.

use serenity::all::{ChannelId, UserId};
use std::time::Duration;

use super::{QUESTIONS, QUESTION_TIMEOUT};
use crate::{
    data::{ApplicationRepository, Store},
    error::{command::CommandError, AppError},
    model::{
        application::Application,
        notice::{Notice, Tone},
    },
    service::outbox::{Outbox, ReplySource},
};

/// How an intake questionnaire ended.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeOutcome {
    /// Every question was answered and the application was stored.
    Submitted(Application),
    /// The respondent missed the deadline on this question (1-based).
    TimedOut { question: usize },
}

/// Runs the intake questionnaire for one respondent.
pub struct IntakeFlow<'a> {
    store: &'a Store,
    outbox: &'a dyn Outbox,
    replies: &'a dyn ReplySource,
    questions: &'a [&'a str],
    timeout: Duration,
}

impl<'a> IntakeFlow<'a> {
    /// Creates a flow asking the standard questions with the standard timeout.
    ///
    /// # Arguments
    /// - `store` - State store the finished application is written to
    /// - `outbox` - Where prompts and status notices are sent
    /// - `replies` - Source of the respondent's answers
    ///
    /// # Returns
    /// - `IntakeFlow` - Flow ready to `run`
    pub fn new(store: &'a Store, outbox: &'a dyn Outbox, replies: &'a dyn ReplySource) -> Self {
        Self {
            store,
            outbox,
            replies,
            questions: &QUESTIONS,
            timeout: QUESTION_TIMEOUT,
        }
    }

    /// Replaces the question list and per-question timeout.
    #[cfg(test)]
    pub fn with_questions(mut self, questions: &'a [&'a str], timeout: Duration) -> Self {
        self.questions = questions;
        self.timeout = timeout;
        self
    }

    /// Runs the questionnaire to completion or first missed deadline.
    ///
    /// Questions are strictly sequential: question `i + 1` is only sent after answer
    /// `i` arrived. Each wait has its own deadline starting when the wait begins. While
    /// the flow runs the respondent is marked as having an intake in progress, and a
    /// second concurrent intake for the same respondent is rejected.
    ///
    /// # Arguments
    /// - `respondent` - Discord ID of the applicant
    /// - `channel_id` - Channel the questionnaire runs in
    ///
    /// # Returns
    /// - `Ok(IntakeOutcome::Submitted)` - Application stored with `pending` status
    /// - `Ok(IntakeOutcome::TimedOut)` - A deadline was missed; nothing stored
    /// - `Err(AppError::CommandErr(IntakeInProgress))` - The respondent already has a
    ///   questionnaire running; no notice was sent
    /// - `Err(AppError)` - A notice failed to send; nothing stored
    pub async fn run(
        &self,
        respondent: UserId,
        channel_id: ChannelId,
    ) -> Result<IntakeOutcome, AppError> {
        let repo = ApplicationRepository::new(self.store);

        if !repo.begin_intake(respondent).await {
            return Err(CommandError::IntakeInProgress.into());
        }

        let collected = self.collect_answers(respondent, channel_id).await;

        let outcome = match collected {
            Ok(Ok(answers)) => {
                let application = Application::submit(respondent, answers);
                if repo.upsert(application.clone()).await.is_some() {
                    tracing::debug!("Replaced earlier application from user {}", respondent);
                }
                Ok(IntakeOutcome::Submitted(application))
            }
            Ok(Err(question)) => Ok(IntakeOutcome::TimedOut { question }),
            Err(e) => Err(e),
        };

        repo.finish_intake(respondent).await;

        match outcome? {
            IntakeOutcome::Submitted(application) => {
                tracing::info!("User {} submitted an application", respondent);
                self.outbox.send(channel_id, submitted_notice()).await?;
                Ok(IntakeOutcome::Submitted(application))
            }
            IntakeOutcome::TimedOut { question } => {
                tracing::info!(
                    "Application from user {} timed out on question {}",
                    respondent,
                    question
                );
                self.outbox.send(channel_id, timeout_notice()).await?;
                Ok(IntakeOutcome::TimedOut { question })
            }
        }
    }

    /// Announces the questionnaire and collects one answer per question.
    ///
    /// # Returns
    /// - `Ok(Ok(answers))` - All questions answered, in order
    /// - `Ok(Err(question))` - Deadline missed on the given 1-based question
    /// - `Err(AppError)` - Sending the announcement or a prompt failed
    async fn collect_answers(
        &self,
        respondent: UserId,
        channel_id: ChannelId,
    ) -> Result<Result<Vec<String>, usize>, AppError> {
        self.outbox
            .send(channel_id, start_notice(self.timeout))
            .await?;

        let mut answers = Vec::with_capacity(self.questions.len());

        for (index, question) in self.questions.iter().enumerate() {
            let number = index + 1;
            self.outbox
                .send(
                    channel_id,
                    question_notice(question, number, self.questions.len()),
                )
                .await?;

            match self
                .replies
                .next_reply(respondent, channel_id, self.timeout)
                .await
            {
                Some(answer) => answers.push(answer),
                None => return Ok(Err(number)),
            }
        }

        Ok(Ok(answers))
    }
}

fn start_notice(timeout: Duration) -> Notice {
    Notice::titled(
        Tone::Info,
        "📝 Server Application",
        format!(
            "Please answer the following questions within {} seconds each.",
            timeout.as_secs()
        ),
    )
}

fn question_notice(question: &str, number: usize, total: usize) -> Notice {
    Notice::new(Tone::Info)
        .description(question)
        .footer(format!("Question {} of {}", number, total))
}

fn timeout_notice() -> Notice {
    Notice::titled(
        Tone::Error,
        "⏰ Timeout",
        "Application timed out. Please try again.",
    )
}

fn submitted_notice() -> Notice {
    Notice::titled(
        Tone::Success,
        "✅ Application Submitted",
        "Your application has been submitted for review!",
    )
}
