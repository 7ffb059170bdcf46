use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

pub const COPY_RESET_DELAY: Duration = Duration::from_millis(1500);

/// System clipboard, injected so the indicator can be driven without one
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// "Copied" flag for the latest-output panel
///
/// A successful copy sets the flag and arms one fire-once timer that clears
/// it. Copying again re-arms the timer. Dropping the indicator cancels it.
pub struct CopyIndicator {
    clipboard: Arc<dyn Clipboard>,
    copied: Arc<AtomicBool>,
    reset_after: Duration,
    reset_task: Option<JoinHandle<()>>,
}

impl CopyIndicator {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            copied: Arc::new(AtomicBool::new(false)),
            reset_after: COPY_RESET_DELAY,
            reset_task: None,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_after = delay;
        self
    }

    pub fn copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    /// Copy `text`, returning whether the clipboard accepted it
    pub async fn copy(&mut self, text: &str) -> bool {
        if let Err(e) = self.clipboard.write_text(text).await {
            tracing::error!("Failed to copy: {}", e);
            return false;
        }

        self.copied.store(true, Ordering::SeqCst);
        self.cancel_reset();

        let copied = self.copied.clone();
        let delay = self.reset_after;
        self.reset_task = Some(tokio::spawn(async move {
            sleep(delay).await;
            copied.store(false, Ordering::SeqCst);
        }));
        true
    }

    fn cancel_reset(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }
    }
}

impl Drop for CopyIndicator {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
