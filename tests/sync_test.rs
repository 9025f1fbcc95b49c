//! Integration tests for server sync against a local stub HTTP server
//!
//! The stub answers every request with a fixed status and body and reports
//! each raw request it received, so tests can check both the merge result
//! and what was sent.

use std::sync::Arc;
use std::time::Duration;

use quotetui::api::QuoteClient;
use quotetui::cache::KvDb;
use quotetui::error::SyncError;
use quotetui::model::quote::Quote;
use quotetui::persistence::Persistence;
use quotetui::services::{spawn_sync_service, SyncCommand, SyncEngine, SyncEvent, SyncReport};
use quotetui::store::QuoteStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::timeout;

fn quote(text: &str, category: &str) -> Quote {
    Quote {
        text: text.to_string(),
        category: category.to_string(),
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())
                .flatten()
        })
        .unwrap_or(0)
}

/// Helper: start a stub server, returning its URL and a feed of raw requests
async fn stub_server(
    status: &'static str,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let request_tx = request_tx.clone();

            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = socket.read(&mut chunk).await.unwrap_or(0);
                    if n == 0 {
                        return;
                    }
                    buf.extend_from_slice(&chunk[..n]);

                    if let Some(end) = find_header_end(&buf) {
                        let head = String::from_utf8_lossy(&buf[..end]).to_string();
                        if buf.len() >= end + content_length(&head) {
                            break;
                        }
                    }
                }

                let _ = request_tx.send(String::from_utf8_lossy(&buf).to_string());

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}/posts", addr), request_rx)
}

/// Helper: server that accepts connections and never answers
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}/posts", addr)
}

/// Helper: store holding exactly `quotes`
fn store_with(quotes: &[Quote]) -> QuoteStore {
    let persistence = Persistence::new(
        Arc::new(KvDb::new_in_memory().unwrap()),
        Arc::new(KvDb::new_in_memory().unwrap()),
    );
    persistence.save_quotes(quotes).unwrap();
    QuoteStore::load(persistence).unwrap()
}

fn engine_for(url: String, store: QuoteStore) -> SyncEngine {
    let client = QuoteClient::new(url, Duration::from_secs(5)).unwrap();
    SyncEngine::new(client, store)
}

const TWO_POSTS: &str = r#"[
    {"userId": 1, "id": 1, "title": "Stay hungry", "body": "..."},
    {"userId": 1, "id": 2, "title": "New idea", "body": "..."}
]"#;

const SEVEN_POSTS: &str = r#"[
    {"title": "one"}, {"title": "two"}, {"title": "three"}, {"title": "four"},
    {"title": "five"}, {"title": "six"}, {"title": "seven"}
]"#;

#[tokio::test]
async fn test_sync_adds_only_unknown_text() {
    let (url, _requests) = stub_server("200 OK", TWO_POSTS).await;
    let store = store_with(&[quote("Stay hungry", "Tech")]);

    let report = engine_for(url, store.clone()).sync().await.unwrap();

    assert_eq!(report, SyncReport { fetched: 2, added: 1 });
    assert_eq!(
        store.snapshot(),
        vec![quote("Stay hungry", "Tech"), quote("New idea", "Server")]
    );
}

#[tokio::test]
async fn test_second_sync_is_noop() {
    let (url, _requests) = stub_server("200 OK", TWO_POSTS).await;
    let store = store_with(&[]);
    let engine = engine_for(url, store.clone());

    assert_eq!(engine.sync().await.unwrap().added, 2);
    assert_eq!(engine.sync().await.unwrap().added, 0);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_only_first_five_records_are_used() {
    let (url, _requests) = stub_server("200 OK", SEVEN_POSTS).await;
    let store = store_with(&[]);

    let report = engine_for(url, store.clone()).sync().await.unwrap();

    assert_eq!(report.fetched, 5);
    let texts: Vec<String> = store.snapshot().into_iter().map(|q| q.text).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four", "five"]);
}

#[tokio::test]
async fn test_custom_limit_and_category() {
    let (url, _requests) = stub_server("200 OK", SEVEN_POSTS).await;
    let store = store_with(&[]);

    let engine = engine_for(url, store.clone())
        .with_fetch_limit(2)
        .with_server_category("Remote");
    engine.sync().await.unwrap();

    assert_eq!(
        store.snapshot(),
        vec![quote("one", "Remote"), quote("two", "Remote")]
    );
}

#[tokio::test]
async fn test_server_error_is_fetch_failure() {
    let (url, _requests) = stub_server("500 Internal Server Error", "oops").await;
    let store = store_with(&[quote("Stay hungry", "Tech")]);

    let err = engine_for(url, store.clone()).sync().await.unwrap_err();

    assert!(matches!(err, SyncError::FetchFailed(_)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_fetch_failure() {
    let (url, _requests) = stub_server("200 OK", "{\"not\": \"a list\"}").await;
    let store = store_with(&[]);

    let err = engine_for(url, store.clone()).sync().await.unwrap_err();
    assert!(matches!(err, SyncError::FetchFailed(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_fetch_failure() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = store_with(&[]);
    let err = engine_for(format!("http://{}/posts", addr), store)
        .sync()
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::FetchFailed(_)));
}

#[tokio::test]
async fn test_publish_posts_quote_json() {
    let (url, mut requests) = stub_server("201 Created", "{\"id\": 101}").await;
    let engine = engine_for(url, store_with(&[]));

    engine.publish(&quote("Stay hungry", "Tech")).await.unwrap();

    let request = requests.recv().await.unwrap();
    assert!(request.starts_with("POST /posts"), "got: {}", request);
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: application/json; charset=utf-8"));
    assert!(request.ends_with(r#"{"text":"Stay hungry","category":"Tech"}"#));
}

#[tokio::test]
async fn test_publish_failure_is_reported() {
    let (url, _requests) = stub_server("500 Internal Server Error", "").await;
    let engine = engine_for(url, store_with(&[]));

    let err = engine.publish(&quote("Stay hungry", "Tech")).await.unwrap_err();
    assert!(matches!(err, SyncError::PublishFailed(_)));
}

#[tokio::test]
async fn test_service_syncs_on_start_and_on_demand() {
    let (url, _requests) = stub_server("200 OK", TWO_POSTS).await;
    let store = store_with(&[quote("Stay hungry", "Tech")]);
    let (command_tx, mut events) =
        spawn_sync_service(engine_for(url, store.clone()), Duration::from_secs(3600));

    let wait = Duration::from_secs(5);
    assert_eq!(timeout(wait, events.recv()).await.unwrap(), Some(SyncEvent::Started));
    assert_eq!(
        timeout(wait, events.recv()).await.unwrap(),
        Some(SyncEvent::Finished(SyncReport { fetched: 2, added: 1 }))
    );

    command_tx.send(SyncCommand::RunNow).unwrap();
    assert_eq!(timeout(wait, events.recv()).await.unwrap(), Some(SyncEvent::Started));
    assert_eq!(
        timeout(wait, events.recv()).await.unwrap(),
        Some(SyncEvent::Finished(SyncReport { fetched: 2, added: 0 }))
    );

    // Dropping the sender stops the service
    drop(command_tx);
    assert_eq!(timeout(wait, events.recv()).await.unwrap(), None);
}

#[tokio::test]
async fn test_service_reports_failure_event() {
    let (url, _requests) = stub_server("500 Internal Server Error", "").await;
    let (_command_tx, mut events) =
        spawn_sync_service(engine_for(url, store_with(&[])), Duration::from_secs(3600));

    let wait = Duration::from_secs(5);
    assert_eq!(timeout(wait, events.recv()).await.unwrap(), Some(SyncEvent::Started));
    match timeout(wait, events.recv()).await.unwrap() {
        Some(SyncEvent::Failed { .. }) => {}
        other => panic!("expected failure event, got {:?}", other),
    }
}

#[tokio::test]
async fn test_hung_fetch_times_out() {
    let url = silent_server().await;
    let store = store_with(&[quote("Stay hungry", "Tech")]);
    let client = QuoteClient::new(url, Duration::from_secs(1)).unwrap();
    let engine = SyncEngine::new(client, store.clone());

    let result = timeout(Duration::from_secs(5), engine.sync())
        .await
        .expect("client timeout should fire before the test timeout");

    assert!(matches!(result, Err(SyncError::FetchFailed(_))));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_service_reports_hung_fetch_as_failure() {
    let url = silent_server().await;
    let client = QuoteClient::new(url, Duration::from_secs(1)).unwrap();
    let (_command_tx, mut events) = spawn_sync_service(
        SyncEngine::new(client, store_with(&[])),
        Duration::from_secs(3600),
    );

    let wait = Duration::from_secs(5);
    assert_eq!(timeout(wait, events.recv()).await.unwrap(), Some(SyncEvent::Started));
    match timeout(wait, events.recv()).await.unwrap() {
        Some(SyncEvent::Failed { .. }) => {}
        other => panic!("expected failure event, got {:?}", other),
    }
}
