//! Hosting for many independent conversations behind the HTTP service.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{SessionId, SessionRecord, SessionSnapshot};
pub use repository::{InMemorySessionRepository, SessionError, SessionRepository};
pub use router::{conversation_router, UtteranceRequest};
pub use service::{ConversationService, TurnResponse};
