use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use tshape_core::model::SessionId;

use super::service::AssessmentSession;
use super::state::SessionState;
use crate::error::{SessionError, StoreError};

/// Keeps live sessions isolated from each other, keyed by `SessionId`.
pub trait SessionStore: Send + Sync {
    /// Take ownership of `session` and return the id it is stored under.
    fn insert(&self, session: AssessmentSession) -> Result<SessionId, StoreError>;

    /// Run `op` against the session stored under `id`.
    fn update(
        &self,
        id: SessionId,
        op: &mut dyn FnMut(&mut AssessmentSession) -> Result<(), SessionError>,
    ) -> Result<(), StoreError>;

    /// Copy of the session's current state.
    fn snapshot(&self, id: SessionId) -> Result<SessionState, StoreError>;

    fn remove(&self, id: SessionId) -> Result<(), StoreError>;

    fn len(&self) -> Result<usize, StoreError>;
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    sessions: HashMap<SessionId, AssessmentSession>,
}

/// Process-local store; nothing outlives the process.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    /// Run `f` with exclusive access to one session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for unknown ids.
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut AssessmentSession) -> R,
    ) -> Result<R, StoreError> {
        let mut guard = self.lock()?;
        let session = guard.sessions.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        Ok(f(session))
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: AssessmentSession) -> Result<SessionId, StoreError> {
        let mut guard = self.lock()?;
        guard.next_id += 1;
        let id = SessionId::new(guard.next_id);
        guard.sessions.insert(id, session);
        debug!(%id, "session stored");
        Ok(id)
    }

    fn update(
        &self,
        id: SessionId,
        op: &mut dyn FnMut(&mut AssessmentSession) -> Result<(), SessionError>,
    ) -> Result<(), StoreError> {
        self.with_session(id, |session| op(session))??;
        Ok(())
    }

    fn snapshot(&self, id: SessionId) -> Result<SessionState, StoreError> {
        self.with_session(id, |session| session.state().clone())
    }

    fn remove(&self, id: SessionId) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        guard
            .sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.sessions.len())
    }
}
