use async_trait::async_trait;
use deckform::{Clipboard, CopyIndicator, COPY_RESET_DELAY};
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

#[derive(Default)]
struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct DeniedClipboard;

#[async_trait]
impl Clipboard for DeniedClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("permission denied".into())
    }
}

#[tokio::test(start_paused = true)]
async fn test_copied_flag_resets_once() {
    let clipboard = Arc::new(MemoryClipboard::default());
    let mut indicator = CopyIndicator::new(clipboard.clone());

    assert!(indicator.copy("latest output").await);
    assert!(indicator.copied());
    assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("latest output"));

    sleep(COPY_RESET_DELAY - Duration::from_millis(100)).await;
    assert!(indicator.copied());

    sleep(Duration::from_millis(200)).await;
    tokio::task::yield_now().await;
    assert!(!indicator.copied());
}

#[tokio::test(start_paused = true)]
async fn test_recopy_rearms_timer() {
    let mut indicator = CopyIndicator::new(Arc::new(MemoryClipboard::default()))
        .with_reset_delay(Duration::from_millis(100));

    assert!(indicator.copy("one").await);
    sleep(Duration::from_millis(80)).await;
    assert!(indicator.copy("two").await);

    sleep(Duration::from_millis(50)).await;
    tokio::task::yield_now().await;
    assert!(indicator.copied());

    sleep(Duration::from_millis(60)).await;
    tokio::task::yield_now().await;
    assert!(!indicator.copied());
}

#[tokio::test]
async fn test_failed_copy_leaves_flag_unset() {
    let mut indicator = CopyIndicator::new(Arc::new(DeniedClipboard));
    assert!(!indicator.copy("latest output").await);
    assert!(!indicator.copied());
}
