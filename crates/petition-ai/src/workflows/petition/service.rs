use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{info, warn};

use super::application::PetitionApplication;
use super::progress::PetitionProgress;
use super::repository::{ApplicationStore, StoreError, StoredApplication};

/// Summary returned after every mutation so callers can see whether it was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationOutcome {
    pub applied: bool,
    pub completed_count: usize,
    pub can_submit_for_review: bool,
    pub submitted: bool,
}

impl MutationOutcome {
    pub fn from_application(applied: bool, application: &PetitionApplication) -> Self {
        Self {
            applied,
            completed_count: application.completed_count(),
            can_submit_for_review: application.can_submit_for_review(),
            submitted: application.is_submitted,
        }
    }
}

/// Single-session facade: one application behind a mutex, persisted after each mutation.
pub struct PetitionService<S> {
    application: Mutex<PetitionApplication>,
    store: Arc<S>,
}

impl<S> PetitionService<S>
where
    S: ApplicationStore + 'static,
{
    /// Start from an empty application without reading the store.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_application(store, PetitionApplication::default())
    }

    pub fn with_application(store: Arc<S>, application: PetitionApplication) -> Self {
        Self {
            application: Mutex::new(application),
            store,
        }
    }

    /// Resume whatever the store holds, or start empty when it holds nothing.
    pub fn open(store: Arc<S>) -> Result<Self, StoreError> {
        let application = match store.load()? {
            Some(stored) => {
                let application = stored.into_application()?;
                info!(
                    completed = application.completed_count(),
                    submitted = application.is_submitted,
                    "resumed stored application"
                );
                application
            }
            None => PetitionApplication::default(),
        };

        Ok(Self::with_application(store, application))
    }

    fn lock(&self) -> MutexGuard<'_, PetitionApplication> {
        self.application
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> PetitionApplication {
        self.lock().clone()
    }

    pub fn read<T, F>(&self, query: F) -> T
    where
        F: FnOnce(&PetitionApplication) -> T,
    {
        query(&self.lock())
    }

    pub fn progress(&self) -> PetitionProgress {
        self.read(PetitionProgress::from_application)
    }

    /// Apply a change and persist the resulting state. A failed save is logged and
    /// never undoes the change.
    ///
    /// The save runs synchronously while the lock is held, so the store always matches
    /// the order of mutations. With [`JsonFileStore`](super::repository::JsonFileStore)
    /// this is a blocking write plus fsync on the calling thread; async callers serving
    /// more than one session should move the call onto a blocking pool.
    pub fn mutate<F>(&self, change: F) -> MutationOutcome
    where
        F: FnOnce(&mut PetitionApplication) -> bool,
    {
        let mut application = self.lock();
        let applied = change(&mut application);
        self.persist(&application);
        MutationOutcome::from_application(applied, &application)
    }

    /// Like [`mutate`](Self::mutate) but hands back whatever the change produced.
    pub fn mutate_with<T, F>(&self, change: F) -> T
    where
        F: FnOnce(&mut PetitionApplication) -> T,
    {
        let mut application = self.lock();
        let output = change(&mut application);
        self.persist(&application);
        output
    }

    pub fn reset(&self) -> MutationOutcome {
        let mut application = self.lock();
        application.reset();
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear stored application");
        }
        MutationOutcome::from_application(true, &application)
    }

    fn persist(&self, application: &PetitionApplication) {
        let stored = StoredApplication::new(application.clone());
        if let Err(err) = self.store.save(&stored) {
            warn!(error = %err, "failed to persist application");
        }
    }
}
