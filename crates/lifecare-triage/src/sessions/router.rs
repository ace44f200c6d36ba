use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{SessionId, SessionSnapshot};
use super::repository::SessionRepository;
use super::service::{ConversationService, TurnResponse};
use crate::error::AppError;

/// Body of an utterance submission.
#[derive(Debug, Clone, Deserialize)]
pub struct UtteranceRequest {
    pub text: String,
    #[serde(default)]
    pub quick_reply: bool,
}

/// Router builder exposing the conversation lifecycle over HTTP.
pub fn conversation_router<R>(service: Arc<ConversationService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/conversations", post(start_handler::<R>))
        .route(
            "/api/v1/conversations/:conversation_id",
            get(snapshot_handler::<R>).delete(close_handler::<R>),
        )
        .route(
            "/api/v1/conversations/:conversation_id/utterances",
            post(utterance_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<ConversationService<R>>>,
) -> Result<(StatusCode, Json<TurnResponse>), AppError>
where
    R: SessionRepository + 'static,
{
    let response = service.start()?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub(crate) async fn utterance_handler<R>(
    State(service): State<Arc<ConversationService<R>>>,
    Path(conversation_id): Path<String>,
    Json(request): Json<UtteranceRequest>,
) -> Result<Json<TurnResponse>, AppError>
where
    R: SessionRepository + 'static,
{
    let id = SessionId(conversation_id);
    let response = service.submit(&id, &request.text, request.quick_reply)?;
    Ok(Json(response))
}

pub(crate) async fn snapshot_handler<R>(
    State(service): State<Arc<ConversationService<R>>>,
    Path(conversation_id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError>
where
    R: SessionRepository + 'static,
{
    let snapshot = service.snapshot(&SessionId(conversation_id))?;
    Ok(Json(snapshot))
}

pub(crate) async fn close_handler<R>(
    State(service): State<Arc<ConversationService<R>>>,
    Path(conversation_id): Path<String>,
) -> Result<StatusCode, AppError>
where
    R: SessionRepository + 'static,
{
    service.close(&SessionId(conversation_id))?;
    Ok(StatusCode::NO_CONTENT)
}
