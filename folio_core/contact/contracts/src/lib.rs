use std::future::Future;

use folio_models::contact::{ContactMessage, ContactSubmission, ContactSubmissionId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Store a validated contact message as a new unread submission.
    fn submit_message(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = anyhow::Result<ContactSubmission>> + Send;

    /// Return all submissions, newest first.
    fn list_submissions(
        &self,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;

    /// Return the submission with the given id, if it exists.
    fn get_submission(
        &self,
        id: ContactSubmissionId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactSubmission>>> + Send;

    /// Flag the submission with the given id as read.
    ///
    /// Returns the updated submission or `None` if it does not exist.
    fn mark_submission_read(
        &self,
        id: ContactSubmissionId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_message(
        mut self,
        message: ContactMessage,
        result: anyhow::Result<ContactSubmission>,
    ) -> Self {
        self.expect_submit_message()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_submissions(mut self, result: anyhow::Result<Vec<ContactSubmission>>) -> Self {
        self.expect_list_submissions()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_submission(
        mut self,
        id: ContactSubmissionId,
        result: Option<ContactSubmission>,
    ) -> Self {
        self.expect_get_submission()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_mark_submission_read(
        mut self,
        id: ContactSubmissionId,
        result: Option<ContactSubmission>,
    ) -> Self {
        self.expect_mark_submission_read()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
