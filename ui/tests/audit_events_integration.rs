use async_trait::async_trait;
use serde_json::{Value, json};
use server::catalog::{CatalogClient, CatalogConfig, CatalogSource};
use server::common::{HttpError, RateLimiter};
use server::security::{AUDIT_TARGET, enable_dev_mode};
use std::sync::Arc;
use std::time::Duration;
use storefront::app::ErrorBoundary;
use storefront::app::boundary::BOUNDARY_EVENT;
use storefront::services::{FetchError, PRODUCTS_API_KEY, ProductsFeed};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Helper module recording security events emitted on the current thread
mod audit_helpers {
    use super::*;
    use log::{LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.target() == AUDIT_TARGET
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                EVENTS.with(|events| events.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    /// Install the capturing logger once, turn auditing on and forget what
    /// this thread recorded so far
    pub fn start_capture() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger in this test binary");
            log::set_max_level(LevelFilter::Trace);
        });
        enable_dev_mode(true);
        EVENTS.with(|events| events.borrow_mut().clear());
    }

    /// Recorded events as (name, details)
    pub fn captured() -> Vec<(String, Value)> {
        EVENTS.with(|events| {
            events
                .borrow()
                .iter()
                .map(|line| {
                    let rest = line
                        .strip_prefix("Security Event: ")
                        .expect("audit line prefix");
                    match rest.find(" {") {
                        Some(split) => (
                            rest[..split].to_string(),
                            serde_json::from_str(&rest[split + 1..]).expect("details are JSON"),
                        ),
                        None => (rest.to_string(), Value::Null),
                    }
                })
                .collect()
        })
    }

    pub fn names() -> Vec<String> {
        captured().into_iter().map(|(name, _)| name).collect()
    }

    pub struct SlowSource;

    #[async_trait]
    impl CatalogSource for SlowSource {
        async fn fetch_products(&self) -> Result<Value, HttpError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(json!([]))
        }

        fn endpoint(&self) -> String {
            "stub://slow".to_string()
        }
    }

    /// Answer one connection with the given status line and body
    pub async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind loopback listener");
        let addr = listener.local_addr().expect("listener has an address");
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
        });

        format!("http://{addr}")
    }

    pub fn http_feed(base_url: &str) -> ProductsFeed {
        let client = CatalogClient::new(CatalogConfig {
            base_url: base_url.to_string(),
            product_limit: 8,
            ..CatalogConfig::default()
        })
        .expect("Failed to build catalog client");
        ProductsFeed::new(
            Arc::new(client),
            Arc::new(RateLimiter::default()),
            Duration::from_secs(10),
        )
    }
}

use audit_helpers::*;

#[tokio::test]
async fn test_rate_limit_denial_is_audited() {
    start_capture();
    let limiter = RateLimiter::new(1, Duration::from_secs(60));
    assert!(limiter.is_allowed(PRODUCTS_API_KEY));
    let feed = ProductsFeed::new(Arc::new(SlowSource), Arc::new(limiter), Duration::from_secs(10));

    let result = feed.fetch().await;

    assert!(matches!(result, Err(FetchError::RateLimited)));
    assert_eq!(
        captured(),
        vec![(
            "API Rate Limit Exceeded".to_string(),
            json!({ "endpoint": "products" })
        )]
    );
}

#[tokio::test]
async fn test_error_status_records_request_failure_then_api_error() {
    start_capture();
    let feed = http_feed(&serve_once("503 Service Unavailable", "{}").await);

    let result = feed.fetch().await;

    assert!(matches!(result, Err(FetchError::Catalog(_))));
    let events = captured();
    assert_eq!(events.len(), 2, "{events:?}");
    assert_eq!(events[0].0, "API Request Failed");
    assert_eq!(
        events[0].1,
        json!({ "status": 503, "statusText": "Service Unavailable" })
    );
    assert_eq!(events[1].0, "API Error");
    assert!(events[1].1["error"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_malformed_body_records_api_error_only() {
    start_capture();
    let feed = http_feed(&serve_once("200 OK", r#"{"products":[]}"#).await);

    let result = feed.fetch().await;

    assert!(matches!(result, Err(FetchError::Catalog(_))));
    assert_eq!(names(), vec!["API Error".to_string()]);
}

#[tokio::test]
async fn test_successful_fetch_records_nothing() {
    start_capture();
    let feed = http_feed(&serve_once("200 OK", r#"[{"id":1,"title":"Backpack"}]"#).await);

    let products = feed.fetch().await.expect("fetch should succeed");

    assert_eq!(products.len(), 1);
    assert!(captured().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_timeout_records_no_event() {
    start_capture();
    let feed = ProductsFeed::new(
        Arc::new(SlowSource),
        Arc::new(RateLimiter::default()),
        Duration::from_secs(10),
    );

    let result = feed.fetch().await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
    assert!(captured().is_empty());
}

#[test]
fn test_boundary_records_the_caught_error() {
    start_capture();
    let boundary = ErrorBoundary::new(false);

    let screen = boundary.catch("dispatch", &"catalog client missing", None);

    assert_eq!(screen, boundary.fallback());
    let events = captured();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, BOUNDARY_EVENT);
    assert_eq!(events[0].1["error"], "catalog client missing");
    assert_eq!(events[0].1["component"], "dispatch");
}

#[test]
fn test_panic_hook_routes_panics_through_the_boundary() {
    start_capture();
    ErrorBoundary::new(false).install_panic_hook();

    let outcome: std::thread::Result<()> = std::panic::catch_unwind(|| panic!("render exploded"));
    let _ = std::panic::take_hook();

    assert!(outcome.is_err());
    let events = captured();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, BOUNDARY_EVENT);
    assert!(events[0].1["error"].as_str().unwrap().contains("render exploded"));
    assert!(events[0].1["stack"].is_string());
}
