//! Application review.
//!
//! A reviewer attaches a free-form status to a stored application. The status is
//! case-folded before storage; the notices echo it as typed. Writing the status and
//! notifying the respondent are not atomic: if the direct message fails the status
//! stays updated.

use serenity::all::{ChannelId, Mentionable, UserId};

use crate::{
    data::{ApplicationRepository, Store},
    error::{command::CommandError, AppError},
    model::{
        application::{Application, ApplicationStatus},
        notice::{Notice, Tone},
    },
    service::outbox::Outbox,
};

/// Records a reviewer's decision on an application.
pub struct ReviewFlow<'a> {
    store: &'a Store,
    outbox: &'a dyn Outbox,
}

impl<'a> ReviewFlow<'a> {
    pub fn new(store: &'a Store, outbox: &'a dyn Outbox) -> Self {
        Self { store, outbox }
    }

    /// Sets the status of a respondent's application and notifies both parties.
    ///
    /// Sends one notice to the reviewer's channel, then one direct message to the
    /// respondent.
    ///
    /// # Arguments
    /// - `reviewer_channel` - Channel the review command was used in
    /// - `respondent` - Discord ID of the applicant
    /// - `status` - Status text as typed by the reviewer
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::CommandErr(ApplicationNotFound))` - The respondent has no
    ///   application; nothing changed and no notice was sent
    /// - `Err(AppError)` - A notice failed to send; the status is already stored
    pub async fn run(
        &self,
        reviewer_channel: ChannelId,
        respondent: UserId,
        status: &str,
    ) -> Result<Application, AppError> {
        let repo = ApplicationRepository::new(self.store);

        let application = repo
            .update_status(respondent, ApplicationStatus::new(status))
            .await
            .ok_or(CommandError::ApplicationNotFound)?;

        tracing::info!(
            "Application from user {} marked as {}",
            respondent,
            application.status
        );

        self.outbox
            .send(
                reviewer_channel,
                Notice::titled(
                    Tone::Info,
                    "📋 Application Review",
                    format!(
                        "Application for {} has been marked as {}",
                        respondent.mention(),
                        status
                    ),
                ),
            )
            .await?;

        self.outbox
            .send_direct(
                respondent,
                Notice::titled(
                    status_tone(&application.status),
                    "📬 Application Status Update",
                    format!("Your application has been {}!", status),
                ),
            )
            .await?;

        Ok(application)
    }
}

/// Green for accepted, red for rejected, orange for anything else.
fn status_tone(status: &ApplicationStatus) -> Tone {
    if status.is_accepted() {
        Tone::Success
    } else if status.is_rejected() {
        Tone::Error
    } else {
        Tone::Caution
    }
}
