use chainview_model::catalog_ddl;
use chainview_query::{QueryService, Translator};
use chainview_server::{build_router, AppState};
use rusqlite::Connection;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn provisioned_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chainview.sqlite");
    let conn = Connection::open(&path).expect("create store");
    conn.execute_batch(catalog_ddl()).expect("provision tables");
    conn.execute_batch(
        "INSERT INTO inventory (id, product_name, quantity, unit_price)
         VALUES (1, 'Shrink wrap', 3, 6.0), (2, 'Pallet jack', 50, 320.0);
         INSERT INTO orders (id, order_date, status, total_amount)
         VALUES (1, '2024-05-01', 'pending', 42.0);",
    )
    .expect("seed rows");
    (dir, path)
}

async fn spawn_app(db_path: PathBuf) -> std::net::SocketAddr {
    let service = QueryService::new(Translator::new(None));
    let state = AppState::new(service, db_path, 16 * 1024);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> (u16, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(body) = body {
        req.push_str("Content-Type: application/json\r\n");
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    if let Some(body) = body {
        req.push_str(body);
    }
    // A rejected oversized body may close the socket before the write
    // drains; the response is still readable.
    let _ = stream.write_all(req.as_bytes()).await;
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, body.to_string())
}

fn json_body(raw: &str) -> Value {
    // Connection: close responses may still be chunked; take the JSON line.
    let trimmed = raw
        .lines()
        .find(|line| line.trim_start().starts_with('{'))
        .unwrap_or(raw);
    serde_json::from_str(trimmed).expect("json body")
}

#[tokio::test]
async fn ask_returns_the_uniform_success_envelope() {
    let (_dir, path) = provisioned_store();
    let addr = spawn_app(path).await;
    let (status, body) = send_raw(
        addr,
        "POST",
        "/v1/ask",
        Some(r#"{"query":"show me low stock items"}"#),
    )
    .await;
    assert_eq!(status, 200);
    let json = json_body(&body);
    assert_eq!(json["success"], true);
    assert_eq!(json["query"], "show me low stock items");
    assert_eq!(
        json["sql"],
        "SELECT * FROM inventory WHERE quantity < 10 ORDER BY quantity ASC;"
    );
    assert_eq!(json["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["results"][0]["quantity"], 3);
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn ask_with_missing_store_returns_failure_envelope() {
    let dir = tempfile::tempdir().expect("tempdir");
    let addr = spawn_app(dir.path().join("absent.sqlite")).await;
    let (status, body) = send_raw(
        addr,
        "POST",
        "/v1/ask",
        Some(r#"{"query":"list pending orders"}"#),
    )
    .await;
    assert_eq!(status, 200, "executor failures ride the envelope");
    let json = json_body(&body);
    assert_eq!(json["success"], false);
    assert_eq!(json["query"], "list pending orders");
    assert!(json["error"].as_str().is_some());
    assert!(json.get("sql").is_none());
}

#[tokio::test]
async fn empty_query_is_a_request_layer_rejection() {
    let (_dir, path) = provisioned_store();
    let addr = spawn_app(path).await;
    let (status, body) = send_raw(addr, "POST", "/v1/ask", Some(r#"{"query":"   "}"#)).await;
    assert_eq!(status, 400);
    let json = json_body(&body);
    assert_eq!(json["error"]["code"], "empty_query");
}

#[tokio::test]
async fn wrongly_shaped_body_is_rejected() {
    let (_dir, path) = provisioned_store();
    let addr = spawn_app(path).await;
    let (status, body) = send_raw(addr, "POST", "/v1/ask", Some(r#"{"query":5}"#)).await;
    assert_eq!(status, 400);
    let json = json_body(&body);
    assert_eq!(json["error"]["code"], "invalid_request_body");
}

#[tokio::test]
async fn health_and_readiness_probes() {
    let (_dir, path) = provisioned_store();
    let addr = spawn_app(path).await;

    let (status, _) = send_raw(addr, "GET", "/healthz", None).await;
    assert_eq!(status, 200);
    let (status, _) = send_raw(addr, "GET", "/readyz", None).await;
    assert_eq!(status, 200);

    let dir = tempfile::tempdir().expect("tempdir");
    let broken = spawn_app(dir.path().join("absent.sqlite")).await;
    let (status, _) = send_raw(broken, "GET", "/healthz", None).await;
    assert_eq!(status, 200, "liveness does not touch the store");
    let (status, _) = send_raw(broken, "GET", "/readyz", None).await;
    assert_eq!(status, 503);
}

#[tokio::test]
async fn oversized_body_is_rejected_before_the_core() {
    let (_dir, path) = provisioned_store();
    let addr = spawn_app(path).await;
    let huge = format!(r#"{{"query":"{}"}}"#, "x".repeat(32 * 1024));
    let (status, _) = send_raw(addr, "POST", "/v1/ask", Some(&huge)).await;
    assert_eq!(status, 413);
}
