use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{SessionId, SessionRecord, SessionSnapshot};
use super::repository::{SessionError, SessionRepository};
use crate::config::SessionConfig;
use crate::dialogue::{create_conversation, Instruction, Mode, Step};

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("conv-{id:06}"))
}

/// Instructions produced by one call into a hosted conversation.
#[derive(Debug, Clone, Serialize)]
pub struct TurnResponse {
    pub conversation_id: SessionId,
    pub mode: Mode,
    pub step: Step,
    pub instructions: Vec<Instruction>,
}

/// Hosts many independent conversations, one engine instance per session.
pub struct ConversationService<R> {
    repository: Arc<R>,
    config: SessionConfig,
}

impl<R> ConversationService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: SessionConfig) -> Self {
        Self { repository, config }
    }

    /// Opens a new conversation and returns its opening turn.
    pub fn start(&self) -> Result<TurnResponse, SessionError> {
        self.start_at(Utc::now())
    }

    pub(crate) fn start_at(&self, now: DateTime<Utc>) -> Result<TurnResponse, SessionError> {
        self.evict_idle_at(now)?;

        let mut conversation = create_conversation();
        let instructions = conversation.start();
        let id = next_session_id();
        let response = TurnResponse {
            conversation_id: id.clone(),
            mode: conversation.state().mode,
            step: conversation.state().step,
            instructions,
        };

        let active = self.repository.insert_within(
            SessionRecord::new(id.clone(), conversation, now),
            self.config.max_sessions,
        )?;
        info!(conversation_id = %id, active, "conversation started");

        Ok(response)
    }

    /// Feeds one utterance to the conversation and returns what to render.
    pub fn submit(
        &self,
        id: &SessionId,
        text: &str,
        is_quick_reply: bool,
    ) -> Result<TurnResponse, SessionError> {
        self.submit_at(id, text, is_quick_reply, Utc::now())
    }

    pub(crate) fn submit_at(
        &self,
        id: &SessionId,
        text: &str,
        is_quick_reply: bool,
        now: DateTime<Utc>,
    ) -> Result<TurnResponse, SessionError> {
        let response = self.repository.update(id, |record| {
            let instructions = record.conversation.submit(text, is_quick_reply);
            if !instructions.is_empty() {
                record.last_active = now;
            }
            TurnResponse {
                conversation_id: record.id.clone(),
                mode: record.conversation.state().mode,
                step: record.conversation.state().step,
                instructions,
            }
        })?;

        debug!(
            conversation_id = %id,
            step = ?response.step,
            instructions = response.instructions.len(),
            "utterance handled"
        );

        Ok(response)
    }

    pub fn snapshot(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError> {
        self.repository.update(id, |record| record.snapshot())
    }

    pub fn close(&self, id: &SessionId) -> Result<(), SessionError> {
        let record = self.repository.remove(id)?;
        info!(
            conversation_id = %record.id,
            completed_triages = record.conversation.completed_triages(),
            "conversation closed"
        );
        Ok(())
    }

    /// Removes conversations idle for longer than the configured timeout.
    pub fn evict_idle_at(&self, now: DateTime<Utc>) -> Result<usize, SessionError> {
        let Some(cutoff) = Duration::try_minutes(self.config.idle_timeout_minutes)
            .and_then(|timeout| now.checked_sub_signed(timeout))
        else {
            return Ok(0);
        };
        let evicted = self.repository.evict_idle(cutoff)?;
        if evicted > 0 {
            info!(evicted, "idle conversations evicted");
        }
        Ok(evicted)
    }
}
