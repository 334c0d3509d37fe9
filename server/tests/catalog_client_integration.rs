use server::catalog::{CatalogClient, CatalogConfig, CatalogSource, parse_products};
use server::common::HttpError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

// Helper module for a one-shot loopback HTTP stub
mod stub_helpers {
    use super::*;

    pub struct StubServer {
        pub base_url: String,
        pub request: oneshot::Receiver<String>,
    }

    /// Serve exactly one request with the given status line and body
    pub async fn serve_once(status_line: &str, body: &str) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind loopback listener");
        let addr = listener.local_addr().expect("listener has an address");
        let (tx, rx) = oneshot::channel();

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }

            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
        });

        StubServer {
            base_url: format!("http://{addr}"),
            request: rx,
        }
    }

    pub fn client_for(base_url: &str) -> CatalogClient {
        CatalogClient::new(CatalogConfig {
            base_url: base_url.to_string(),
            product_limit: 8,
            ..CatalogConfig::default()
        })
        .expect("Failed to build catalog client")
    }
}

use stub_helpers::*;

#[tokio::test]
async fn test_fetch_sends_limit_and_json_headers() {
    let stub = serve_once("200 OK", r#"[{"id":1,"title":"Backpack","price":109.95}]"#).await;
    let client = client_for(&stub.base_url);

    let body = client.fetch_products().await.expect("fetch should succeed");
    let request = stub.request.await.expect("stub saw the request").to_lowercase();

    assert!(request.starts_with("get /products?limit=8 http/1.1"));
    assert!(request.contains("accept: application/json"));
    assert!(request.contains("content-type: application/json"));

    let products = parse_products(body).expect("body is an array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Backpack");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let stub = serve_once("503 Service Unavailable", "{}").await;
    let client = client_for(&stub.base_url);

    match client.fetch_products().await {
        Err(HttpError::Status { status, reason, .. }) => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_invalid_response() {
    let stub = serve_once("200 OK", "not json at all").await;
    let client = client_for(&stub.base_url);

    assert!(matches!(
        client.fetch_products().await,
        Err(HttpError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_object_body_fails_shape_validation() {
    let stub = serve_once("200 OK", r#"{"error":"maintenance"}"#).await;
    let client = client_for(&stub.base_url);

    let body = client.fetch_products().await.expect("body is valid JSON");
    assert!(matches!(
        parse_products(body),
        Err(HttpError::InvalidResponse { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_request_failure() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    assert!(matches!(
        client.fetch_products().await,
        Err(HttpError::RequestFailed { .. })
    ));
}

#[tokio::test]
async fn test_silent_server_hits_transport_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and hold the connection without ever answering
        let Ok((socket, _)) = listener.accept().await else {
            return;
        };
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        drop(socket);
    });

    let client = CatalogClient::new(CatalogConfig {
        base_url: format!("http://{addr}"),
        product_limit: 8,
        request_timeout: std::time::Duration::from_secs(1),
    })
    .expect("Failed to build catalog client");

    match client.fetch_products().await {
        Err(error @ HttpError::Timeout { seconds, .. }) => {
            assert!(error.is_timeout());
            assert_eq!(seconds, 1);
        }
        other => panic!("Expected timeout error, got {other:?}"),
    }
}
