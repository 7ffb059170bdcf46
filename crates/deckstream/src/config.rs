use std::time::Duration;

pub const ENDPOINT_ENV: &str = "FLOWDECK_WS_URL";
pub const CONNECT_TIMEOUT_ENV: &str = "FLOWDECK_WS_CONNECT_TIMEOUT_MS";

/// Configuration for the event socket
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub endpoint: String,
    pub connect_timeout_ms: u64,
}

impl StreamConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `FLOWDECK_WS_URL` and `FLOWDECK_WS_CONNECT_TIMEOUT_MS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = std::env::var(CONNECT_TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.connect_timeout_ms = timeout;
        }
        config
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: "ws://localhost:8080".to_string(),
            connect_timeout_ms: 10_000,
        }
    }
}
