use crate::transport::{Transport, TransportFactory};
use async_trait::async_trait;
use deckcore::StreamError;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// Opens WebSocket transports
#[derive(Debug, Clone, Copy, Default)]
pub struct WsConnector;

#[async_trait]
impl TransportFactory for WsConnector {
    async fn connect(&self, endpoint: &str) -> Result<Box<dyn Transport>, StreamError> {
        tracing::debug!("Connecting to {}", endpoint);

        let (stream, _response) = connect_async(endpoint).await.map_err(|e| {
            tracing::error!("WebSocket connect to {} failed: {:?}", endpoint, e);
            StreamError::Connect {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Box::new(WsTransport { stream, open: true }))
    }
}

/// WebSocket carrying text frames
///
/// Ping and pong frames are answered by tungstenite itself and binary frames
/// are skipped; a close frame ends the stream.
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    open: bool,
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, text: String) -> Result<(), StreamError> {
        if !self.open {
            return Err(StreamError::Closed);
        }
        self.stream
            .send(Message::Text(text))
            .await
            .map_err(|e| StreamError::Send(e.to_string()))
    }

    async fn recv(&mut self) -> Option<Result<String, StreamError>> {
        while let Some(message) = self.stream.next().await {
            match message {
                Ok(Message::Text(text)) => return Some(Ok(text)),
                Ok(Message::Close(frame)) => {
                    tracing::debug!("Peer closed socket: {:?}", frame);
                    self.open = false;
                    return None;
                }
                Ok(_) => continue,
                Err(e) => {
                    self.open = false;
                    return Some(Err(StreamError::Receive(e.to_string())));
                }
            }
        }
        self.open = false;
        None
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn close(&mut self) -> Result<(), StreamError> {
        self.open = false;
        match self.stream.close(None).await {
            Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => Ok(()),
            Err(e) => Err(StreamError::Send(e.to_string())),
        }
    }
}
