use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dialogue::{Conversation, ConversationState, Mode, Step, SummaryDisplay};

/// Identifier wrapper for hosted conversations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored conversation with bookkeeping for idle eviction.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub conversation: Conversation,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(id: SessionId, conversation: Conversation, now: DateTime<Utc>) -> Self {
        Self {
            id,
            conversation,
            created_at: now,
            last_active: now,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.conversation.state().clone();
        SessionSnapshot {
            conversation_id: self.id.clone(),
            mode: state.mode,
            step: state.step,
            state,
            summary: self.conversation.summary(),
            completed_triages: self.conversation.completed_triages(),
            created_at: self.created_at,
            last_active: self.last_active,
        }
    }
}

/// Read-only view returned by the session endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub conversation_id: SessionId,
    pub mode: Mode,
    pub step: Step,
    pub state: ConversationState,
    pub summary: SummaryDisplay,
    pub completed_triages: u32,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}
