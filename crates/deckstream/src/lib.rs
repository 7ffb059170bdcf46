//! Live workflow execution events
//!
//! Subscribes to one workflow's events over a message socket and folds them
//! into per-node status and output maps.

mod config;
mod handle;
mod state;
mod subscription;
mod transport;
mod websocket;

pub use config::StreamConfig;
pub use handle::WorkflowEvents;
pub use state::WorkflowState;
pub use subscription::{Subscription, SubscriptionId, SubscriptionStatus};
pub use transport::{Transport, TransportFactory};
pub use websocket::{WsConnector, WsTransport};
