use lifecare_triage::config::SessionConfig;
use lifecare_triage::sessions::{ConversationService, InMemorySessionRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type HostedConversations = ConversationService<InMemorySessionRepository>;

pub(crate) fn conversation_service(config: SessionConfig) -> Arc<HostedConversations> {
    let repository = Arc::new(InMemorySessionRepository::default());
    Arc::new(ConversationService::new(repository, config))
}
