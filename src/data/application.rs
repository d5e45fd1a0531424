use serenity::all::UserId;

use super::Store;
use crate::model::application::{Application, ApplicationStatus};

/// Access to stored applications and running intake markers.
pub struct ApplicationRepository<'a> {
    store: &'a Store,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Finds the application submitted by a respondent.
    ///
    /// # Arguments
    /// - `respondent` - Discord ID of the applicant
    ///
    /// # Returns
    /// - `Some(Application)` - Copy of the stored application
    /// - `None` - The respondent has never completed an intake
    #[cfg(test)]
    pub async fn find(&self, respondent: UserId) -> Option<Application> {
        self.store
            .tables
            .read()
            .await
            .applications
            .get(&respondent)
            .cloned()
    }

    /// Stores an application, replacing any earlier one from the same respondent.
    ///
    /// # Arguments
    /// - `application` - The completed application
    ///
    /// # Returns
    /// - `Some(Application)` - The record that was replaced
    /// - `None` - This is the respondent's first application
    pub async fn upsert(&self, application: Application) -> Option<Application> {
        self.store
            .tables
            .write()
            .await
            .applications
            .insert(application.respondent, application)
    }

    /// Replaces the status of an existing application.
    ///
    /// Answers and submission time are left untouched.
    ///
    /// # Arguments
    /// - `respondent` - Discord ID of the applicant
    /// - `status` - New, already case-folded status
    ///
    /// # Returns
    /// - `Some(Application)` - The updated application
    /// - `None` - No application exists; nothing was changed
    pub async fn update_status(
        &self,
        respondent: UserId,
        status: ApplicationStatus,
    ) -> Option<Application> {
        let mut tables = self.store.tables.write().await;
        let application = tables.applications.get_mut(&respondent)?;
        application.status = status;
        Some(application.clone())
    }

    /// Marks a respondent's intake as running.
    ///
    /// # Returns
    /// - `true` - Marker set; the caller owns the intake and must call `finish_intake`
    /// - `false` - An intake for this respondent is already running
    pub async fn begin_intake(&self, respondent: UserId) -> bool {
        self.store
            .tables
            .write()
            .await
            .intakes_in_flight
            .insert(respondent)
    }

    /// Clears a respondent's running-intake marker.
    pub async fn finish_intake(&self, respondent: UserId) {
        self.store
            .tables
            .write()
            .await
            .intakes_in_flight
            .remove(&respondent);
    }

    #[cfg(test)]
    pub async fn intake_in_progress(&self, respondent: UserId) -> bool {
        self.store
            .tables
            .read()
            .await
            .intakes_in_flight
            .contains(&respondent)
    }
}
