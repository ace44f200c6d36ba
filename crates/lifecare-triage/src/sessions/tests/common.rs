use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::config::SessionConfig;
use crate::sessions::{conversation_router, ConversationService, InMemorySessionRepository};

pub(super) fn session_config(max_sessions: usize) -> SessionConfig {
    SessionConfig {
        max_sessions,
        idle_timeout_minutes: 30,
    }
}

pub(super) fn build_service(
    max_sessions: usize,
) -> (
    ConversationService<InMemorySessionRepository>,
    Arc<InMemorySessionRepository>,
) {
    let repository = Arc::new(InMemorySessionRepository::default());
    let service = ConversationService::new(repository.clone(), session_config(max_sessions));
    (service, repository)
}

pub(super) fn router(max_sessions: usize) -> axum::Router {
    let (service, _) = build_service(max_sessions);
    conversation_router(Arc::new(service))
}

pub(super) fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serializes")))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
