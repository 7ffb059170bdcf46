use async_trait::async_trait;
use deckcore::StreamError;

/// Message-oriented connection carrying JSON text frames
#[async_trait]
pub trait Transport: Send {
    async fn send(&mut self, text: String) -> Result<(), StreamError>;

    /// Next inbound text message, `None` once the peer has closed
    async fn recv(&mut self) -> Option<Result<String, StreamError>>;

    fn is_open(&self) -> bool;

    async fn close(&mut self) -> Result<(), StreamError>;
}

/// Opens transports; injected so tests can run without a socket
#[async_trait]
pub trait TransportFactory: Send + Sync {
    async fn connect(&self, endpoint: &str) -> Result<Box<dyn Transport>, StreamError>;
}
