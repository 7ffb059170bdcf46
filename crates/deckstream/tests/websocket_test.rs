use deckcore::NodeStatus;
use deckstream::{StreamConfig, SubscriptionStatus, WorkflowEvents};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::time::{timeout, Duration};
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

const STARTED: &str = r#"{"type":"node_started","workflowId":"wf-1","nodeId":"a"}"#;

async fn wait_status(rx: &mut watch::Receiver<SubscriptionStatus>, wanted: SubscriptionStatus) {
    timeout(Duration::from_secs(5), rx.wait_for(|s| *s == wanted))
        .await
        .expect("timed out waiting for status")
        .expect("status channel closed");
}

/// Accept one client, push a few frames, close, and return what the client sent first
async fn serve_once(listener: TcpListener) -> String {
    let (socket, _) = listener.accept().await.unwrap();
    let mut ws = accept_async(socket).await.unwrap();

    let first = ws.next().await.unwrap().unwrap();

    ws.send(Message::Binary(vec![1, 2, 3])).await.unwrap();
    ws.send(Message::Ping(vec![7])).await.unwrap();
    ws.send(Message::Text(STARTED.to_string())).await.unwrap();
    ws.send(Message::Close(None)).await.unwrap();

    while let Some(Ok(_)) = ws.next().await {}

    first.into_text().unwrap()
}

#[tokio::test]
async fn test_websocket_folds_text_frames_only() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve_once(listener));

    let mut events = WorkflowEvents::websocket(StreamConfig::new(format!("ws://{}", addr)));
    let mut status = events.status();

    events.watch("wf-1").await;
    wait_status(&mut status, SubscriptionStatus::Closed).await;

    let state = events.snapshot();
    assert_eq!(state.events.len(), 1);
    assert_eq!(state.status("a"), Some(NodeStatus::Running));

    let first = timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not finish")
        .unwrap();
    assert_eq!(first, r#"{"type":"subscribe","workflowId":"wf-1"}"#);

    events.detach().await;
}

#[tokio::test]
async fn test_websocket_connect_refused_closes() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut events = WorkflowEvents::websocket(StreamConfig::new(format!("ws://{}", addr)));
    let mut status = events.status();

    events.watch("wf-1").await;
    wait_status(&mut status, SubscriptionStatus::Closed).await;
    assert!(events.snapshot().events.is_empty());
}
