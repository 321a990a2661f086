use std::future::Future;

use folio_models::contact::{ContactMessage, ContactSubmission, ContactSubmissionId};

/// Storage for contact submissions.
///
/// The repository owns identity and creation time: callers hand in a
/// validated message and get back the stored record.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository: Send + Sync + 'static {
    /// Store a new unread submission with the next id and the current time.
    fn create(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = anyhow::Result<ContactSubmission>> + Send;

    /// Return all submissions, newest first.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;

    /// Return the submission with the given id.
    fn get(
        &self,
        id: ContactSubmissionId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactSubmission>>> + Send;

    /// Flag the submission with the given id as read and return it.
    ///
    /// Returns `None` without any side effects if the submission does not
    /// exist.
    fn mark_read(
        &self,
        id: ContactSubmissionId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRepository {
    pub fn with_create(mut self, message: ContactMessage, result: ContactSubmission) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(mut self, id: ContactSubmissionId, result: Option<ContactSubmission>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_mark_read(
        mut self,
        id: ContactSubmissionId,
        result: Option<ContactSubmission>,
    ) -> Self {
        self.expect_mark_read()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
