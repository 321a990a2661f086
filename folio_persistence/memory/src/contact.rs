use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use folio_di::Build;
use folio_models::contact::{ContactMessage, ContactSubmission, ContactSubmissionId};
use folio_persistence_contracts::contact::ContactRepository;
use folio_shared_contracts::time::TimeService;
use folio_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct MemoryContactRepository<Time> {
    time: Time,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    submissions: BTreeMap<ContactSubmissionId, ContactSubmission>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            next_id: 1,
            submissions: BTreeMap::new(),
        }
    }
}

impl<Time> MemoryContactRepository<Time> {
    // Records are only inserted fully formed, so the map is consistent even
    // if another holder of the lock panicked.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.state
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Time> ContactRepository for MemoryContactRepository<Time>
where
    Time: TimeService,
{
    #[trace_instrument(skip(self))]
    async fn create(&self, message: ContactMessage) -> anyhow::Result<ContactSubmission> {
        let mut inner = self.lock();

        let id = ContactSubmissionId::new(inner.next_id);
        inner.next_id += 1;

        let now = self.time.now();
        let created_at = match inner.submissions.last_key_value() {
            Some((_, newest)) => now.max(newest.created_at),
            None => now,
        };

        let submission = ContactSubmission {
            id,
            message,
            created_at,
            read: false,
        };
        inner.submissions.insert(id, submission.clone());

        Ok(submission)
    }

    #[trace_instrument(skip(self))]
    async fn list(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        let mut submissions = self.lock().submissions.values().cloned().collect::<Vec<_>>();
        submissions.sort_by(ContactSubmission::cmp_newest_first);
        Ok(submissions)
    }

    #[trace_instrument(skip(self))]
    async fn get(&self, id: ContactSubmissionId) -> anyhow::Result<Option<ContactSubmission>> {
        Ok(self.lock().submissions.get(&id).cloned())
    }

    #[trace_instrument(skip(self))]
    async fn mark_read(
        &self,
        id: ContactSubmissionId,
    ) -> anyhow::Result<Option<ContactSubmission>> {
        Ok(self.lock().submissions.get_mut(&id).map(|submission| {
            submission.read = true;
            submission.clone()
        }))
    }
}
