use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::domain::{SessionId, SessionRecord};

/// Storage abstraction so the service can be exercised in isolation.
///
/// `update` runs the closure while the record is exclusively borrowed, which keeps each
/// turn atomic with respect to other requests for the same conversation.
pub trait SessionRepository: Send + Sync {
    /// Stores `record` unless `max_sessions` are already held; check and insert share one lock.
    fn insert_within(
        &self,
        record: SessionRecord,
        max_sessions: usize,
    ) -> Result<usize, SessionError>;
    fn update<T>(
        &self,
        id: &SessionId,
        apply: impl FnOnce(&mut SessionRecord) -> T,
    ) -> Result<T, SessionError>;
    fn remove(&self, id: &SessionId) -> Result<SessionRecord, SessionError>;
    fn len(&self) -> Result<usize, SessionError>;
    /// Drops every record last touched before `cutoff`, returning how many went.
    fn evict_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("conversation {0} not found")]
    NotFound(String),
    #[error("session limit of {0} conversations reached")]
    CapacityReached(usize),
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Process-local store; conversations vanish on restart.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionRecord>>, SessionError> {
        self.records
            .lock()
            .map_err(|_| SessionError::Unavailable("session mutex poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert_within(
        &self,
        record: SessionRecord,
        max_sessions: usize,
    ) -> Result<usize, SessionError> {
        let mut guard = self.lock()?;
        if guard.len() >= max_sessions {
            return Err(SessionError::CapacityReached(max_sessions));
        }
        guard.insert(record.id.clone(), record);
        Ok(guard.len())
    }

    fn update<T>(
        &self,
        id: &SessionId,
        apply: impl FnOnce(&mut SessionRecord) -> T,
    ) -> Result<T, SessionError> {
        let mut guard = self.lock()?;
        let record = guard
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.0.clone()))?;
        Ok(apply(record))
    }

    fn remove(&self, id: &SessionId) -> Result<SessionRecord, SessionError> {
        let mut guard = self.lock()?;
        guard
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.0.clone()))
    }

    fn len(&self) -> Result<usize, SessionError> {
        Ok(self.lock()?.len())
    }

    fn evict_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, SessionError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|_, record| record.last_active >= cutoff);
        Ok(before - guard.len())
    }
}
