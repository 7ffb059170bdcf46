use crate::config::StreamConfig;
use crate::state::WorkflowState;
use crate::transport::{Transport, TransportFactory};
use deckcore::{ClientMessage, WorkflowId};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

pub type SubscriptionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Idle,
    Connecting,
    Subscribed,
    Closed,
}

/// One live subscription to a workflow's events
///
/// The transport is owned by a spawned task. Cancelling it, explicitly or by
/// dropping the handle, makes the task send `unsubscribe` while the socket is
/// still open and then close it.
pub struct Subscription {
    id: SubscriptionId,
    workflow_id: WorkflowId,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn start(
        factory: Arc<dyn TransportFactory>,
        config: &StreamConfig,
        workflow_id: WorkflowId,
        state: Arc<watch::Sender<WorkflowState>>,
        status: Arc<watch::Sender<SubscriptionStatus>>,
    ) -> Self {
        let id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let span = tracing::info_span!("subscription", %id, workflow = %workflow_id);

        let session = Session {
            factory,
            endpoint: config.endpoint.clone(),
            connect_timeout: config.connect_timeout(),
            workflow_id: workflow_id.clone(),
            state,
            status,
            cancel: cancel.clone(),
        };
        let task = tokio::spawn(session.run().instrument(span));

        Self {
            id,
            workflow_id,
            cancel,
            task: Some(task),
        }
    }

    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }

    /// Tear down and wait until `unsubscribe` has been sent and the transport closed
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("Subscription task {} failed: {}", self.id, e);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Session {
    factory: Arc<dyn TransportFactory>,
    endpoint: String,
    connect_timeout: Duration,
    workflow_id: WorkflowId,
    state: Arc<watch::Sender<WorkflowState>>,
    status: Arc<watch::Sender<SubscriptionStatus>>,
    cancel: CancellationToken,
}

impl Session {
    async fn run(self) {
        self.status.send_replace(SubscriptionStatus::Connecting);

        let connect = timeout(self.connect_timeout, self.factory.connect(&self.endpoint));
        let mut transport = tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::debug!("Cancelled before connecting");
                self.status.send_replace(SubscriptionStatus::Closed);
                return;
            }
            result = connect => match result {
                Ok(Ok(transport)) => transport,
                Ok(Err(e)) => {
                    tracing::error!("Failed to open event stream: {}", e);
                    self.status.send_replace(SubscriptionStatus::Closed);
                    return;
                }
                Err(_) => {
                    tracing::error!(
                        "Connect timeout after {}ms",
                        self.connect_timeout.as_millis()
                    );
                    self.status.send_replace(SubscriptionStatus::Closed);
                    return;
                }
            }
        };

        tracing::info!("WS connected to {}", self.endpoint);

        if self.send(transport.as_mut(), ClientMessage::subscribe(&self.workflow_id)).await {
            self.status.send_replace(SubscriptionStatus::Subscribed);
            self.receive(transport.as_mut()).await;
        }

        self.teardown(transport.as_mut()).await;
    }

    async fn receive(&self, transport: &mut dyn Transport) {
        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                message = transport.recv() => match message {
                    Some(Ok(text)) => {
                        self.state
                            .send_if_modified(|state| state.handle_message(&self.workflow_id, &text));
                    }
                    Some(Err(e)) => {
                        tracing::warn!("Event stream error: {}", e);
                        break;
                    }
                    None => {
                        tracing::info!("WS disconnected");
                        break;
                    }
                }
            }
        }
    }

    async fn teardown(&self, transport: &mut dyn Transport) {
        if transport.is_open() {
            self.send(transport, ClientMessage::unsubscribe(&self.workflow_id))
                .await;
        }
        if let Err(e) = transport.close().await {
            tracing::warn!("Failed to close event stream: {}", e);
        }
        self.status.send_replace(SubscriptionStatus::Closed);
        tracing::info!("Unsubscribed from workflow {}", self.workflow_id);
    }

    async fn send(&self, transport: &mut dyn Transport, message: ClientMessage) -> bool {
        let text = match message.to_json() {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("{}", e);
                return false;
            }
        };
        match transport.send(text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to send {:?}: {}", message, e);
                false
            }
        }
    }
}
