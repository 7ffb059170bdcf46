use crate::config::StreamConfig;
use crate::state::WorkflowState;
use crate::subscription::{Subscription, SubscriptionStatus};
use crate::transport::TransportFactory;
use crate::websocket::WsConnector;
use std::sync::Arc;
use tokio::sync::watch;

/// Live events for the workflow a view is showing
///
/// At most one subscription is live per handle. Switching workflows tears the
/// previous subscription down completely before the next one is opened.
pub struct WorkflowEvents {
    factory: Arc<dyn TransportFactory>,
    config: StreamConfig,
    state: Arc<watch::Sender<WorkflowState>>,
    status: Arc<watch::Sender<SubscriptionStatus>>,
    current: Option<Subscription>,
}

impl WorkflowEvents {
    pub fn new(factory: Arc<dyn TransportFactory>, config: StreamConfig) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        let (status, _) = watch::channel(SubscriptionStatus::Idle);
        Self {
            factory,
            config,
            state: Arc::new(state),
            status: Arc::new(status),
            current: None,
        }
    }

    /// Handle backed by real WebSocket connections
    pub fn websocket(config: StreamConfig) -> Self {
        Self::new(Arc::new(WsConnector), config)
    }

    /// Follow `workflow_id`; an empty id only tears down
    pub async fn watch(&mut self, workflow_id: &str) {
        if self.workflow_id() == Some(workflow_id) {
            return;
        }

        if let Some(previous) = self.current.take() {
            tracing::info!("Switching from workflow {}", previous.workflow_id());
            previous.shutdown().await;
        }

        self.state.send_replace(WorkflowState::default());

        if workflow_id.is_empty() {
            self.status.send_replace(SubscriptionStatus::Idle);
            return;
        }

        self.current = Some(Subscription::start(
            self.factory.clone(),
            &self.config,
            workflow_id.to_string(),
            self.state.clone(),
            self.status.clone(),
        ));
    }

    /// Tear down the current subscription and wait for it to close
    pub async fn detach(&mut self) {
        if let Some(current) = self.current.take() {
            current.shutdown().await;
        }
    }

    pub fn workflow_id(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.workflow_id())
    }

    /// Receiver notified whenever an event is folded in
    pub fn state(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn status(&self) -> watch::Receiver<SubscriptionStatus> {
        self.status.subscribe()
    }

    pub fn snapshot(&self) -> WorkflowState {
        self.state.borrow().clone()
    }
}
