use folio_core_contact_contracts::ContactFeatureService;
use folio_di::Build;
use folio_models::contact::{ContactMessage, ContactSubmission, ContactSubmissionId};
use folio_persistence_contracts::contact::ContactRepository;
use folio_utils::trace_instrument;
use tracing::{debug, info};

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<ContactRepo> {
    contact_repo: ContactRepo,
}

impl<ContactRepo> ContactFeatureService for ContactFeatureServiceImpl<ContactRepo>
where
    ContactRepo: ContactRepository,
{
    #[trace_instrument(skip(self))]
    async fn submit_message(&self, message: ContactMessage) -> anyhow::Result<ContactSubmission> {
        let submission = self.contact_repo.create(message).await?;

        info!(
            id = %submission.id,
            created_at = %submission.created_at,
            "received contact submission"
        );

        Ok(submission)
    }

    #[trace_instrument(skip(self))]
    async fn list_submissions(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        self.contact_repo.list().await
    }

    #[trace_instrument(skip(self))]
    async fn get_submission(
        &self,
        id: ContactSubmissionId,
    ) -> anyhow::Result<Option<ContactSubmission>> {
        self.contact_repo.get(id).await
    }

    #[trace_instrument(skip(self))]
    async fn mark_submission_read(
        &self,
        id: ContactSubmissionId,
    ) -> anyhow::Result<Option<ContactSubmission>> {
        let submission = self.contact_repo.mark_read(id).await?;

        match &submission {
            Some(_) => info!(%id, "marked contact submission as read"),
            None => debug!(%id, "contact submission to mark as read not found"),
        }

        Ok(submission)
    }
}
