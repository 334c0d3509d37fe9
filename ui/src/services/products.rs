use serde_json::json;
use server::catalog::{CatalogSource, Product, parse_products};
use server::common::{HttpError, RateLimiter};
use server::security::log_security_event;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Rate limiter key shared by every products feed
pub const PRODUCTS_API_KEY: &str = "products-api";

pub const RATE_LIMITED_MESSAGE: &str =
    "Too many requests. Please wait a moment before trying again.";
pub const TIMEOUT_MESSAGE: &str = "Request timeout. Please check your connection and try again.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products. Please try again later.";

/// What a page renders from: the product list, a loading flag and an
/// optional user-facing error.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Why a fetch cycle ended without products
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Products request rejected by the rate limiter")]
    RateLimited,

    #[error("Catalog did not answer within {}s", .after.as_secs())]
    Timeout { after: Duration },

    #[error(transparent)]
    Catalog(#[from] HttpError),
}

impl FetchError {
    /// The message shown to the user. Status codes and upstream details stay
    /// in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::RateLimited => RATE_LIMITED_MESSAGE,
            FetchError::Timeout { .. } => TIMEOUT_MESSAGE,
            FetchError::Catalog(_) => FETCH_FAILED_MESSAGE,
        }
    }
}

/// Secured catalog fetch.
///
/// Each [`mount`](Self::mount) runs exactly one cycle: admission check
/// against the shared [`RateLimiter`], one request raced against the
/// timeout, then shape validation and coercion of the body. Failures never
/// escape; they end up as `error` on the published [`FetchState`].
#[derive(Clone)]
pub struct ProductsFeed {
    source: Arc<dyn CatalogSource>,
    limiter: Arc<RateLimiter>,
    timeout: Duration,
}

impl std::fmt::Debug for ProductsFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsFeed")
            .field("endpoint", &self.source.endpoint())
            .field("limiter", &self.limiter)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProductsFeed {
    pub fn new(source: Arc<dyn CatalogSource>, limiter: Arc<RateLimiter>, timeout: Duration) -> Self {
        Self {
            source,
            limiter,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start one fetch cycle in the background.
    ///
    /// The returned handle starts out `loading`. Dropping it aborts the cycle,
    /// so nothing is published after the consumer went away.
    pub fn mount(&self) -> ProductsHandle {
        let (tx, rx) = watch::channel(FetchState::default());
        let feed = self.clone();
        let task = tokio::spawn(async move {
            let outcome = feed.fetch().await;
            tx.send_modify(|state| {
                match outcome {
                    Ok(products) => {
                        state.products = products;
                        state.error = None;
                    }
                    Err(e) => {
                        state.products.clear();
                        state.error = Some(e.user_message().to_string());
                    }
                }
                state.loading = false;
            });
        });

        ProductsHandle { state: rx, task }
    }

    /// Run one cycle and return its outcome directly
    pub async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        if !self.limiter.is_allowed(PRODUCTS_API_KEY) {
            log::warn!("Products request rejected by rate limiter");
            log_security_event(
                "API Rate Limit Exceeded",
                Some(json!({ "endpoint": "products" })),
            );
            return Err(FetchError::RateLimited);
        }

        // Dropping the losing branch aborts the request or clears the timer
        let result = tokio::select! {
            result = self.source.fetch_products() => result,
            _ = tokio::time::sleep(self.timeout) => {
                log::warn!(
                    "Products request to {} timed out after {:?}",
                    self.source.endpoint(),
                    self.timeout
                );
                return Err(FetchError::Timeout { after: self.timeout });
            }
        };

        match result.and_then(parse_products) {
            Ok(products) => {
                log::info!("Loaded {} products", products.len());
                Ok(products)
            }
            Err(e) if e.is_timeout() => {
                log::warn!("Products request timed out in transport: {e}");
                Err(FetchError::Timeout {
                    after: self.timeout,
                })
            }
            Err(e) => {
                log::error!("Failed to fetch products: {e}");
                log_security_event("API Error", Some(json!({ "error": e.to_string() })));
                Err(FetchError::Catalog(e))
            }
        }
    }
}

/// A mounted products feed
#[derive(Debug)]
pub struct ProductsHandle {
    state: watch::Receiver<FetchState>,
    task: JoinHandle<()>,
}

impl ProductsHandle {
    /// Latest published state
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.clone()
    }

    /// Wait for the cycle to finish and return the final state
    pub async fn settled(&mut self) -> FetchState {
        if let Ok(state) = self.state.wait_for(|state| !state.loading).await {
            return state.clone();
        }
        // The cycle was aborted before it published
        self.state.borrow().clone()
    }
}

impl Drop for ProductsHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mod feed_helpers {
        use super::*;

        pub enum Reply {
            Body(Value),
            Status(u16),
        }

        pub struct StubSource {
            pub reply: Reply,
            pub delay: Duration,
            pub calls: AtomicUsize,
        }

        impl StubSource {
            pub fn body(body: Value) -> Arc<Self> {
                Arc::new(Self {
                    reply: Reply::Body(body),
                    delay: Duration::from_millis(20),
                    calls: AtomicUsize::new(0),
                })
            }

            pub fn status(status: u16) -> Arc<Self> {
                Arc::new(Self {
                    reply: Reply::Status(status),
                    delay: Duration::from_millis(20),
                    calls: AtomicUsize::new(0),
                })
            }

            pub fn slow(delay: Duration) -> Arc<Self> {
                Arc::new(Self {
                    reply: Reply::Body(Value::Array(Vec::new())),
                    delay,
                    calls: AtomicUsize::new(0),
                })
            }
        }

        #[async_trait]
        impl CatalogSource for StubSource {
            async fn fetch_products(&self) -> Result<Value, HttpError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(self.delay).await;
                match &self.reply {
                    Reply::Body(body) => Ok(body.clone()),
                    Reply::Status(status) => Err(HttpError::Status {
                        url: self.endpoint(),
                        status: *status,
                        reason: "Service Unavailable".to_string(),
                    }),
                }
            }

            fn endpoint(&self) -> String {
                "stub://products".to_string()
            }
        }

        pub fn feed(source: Arc<StubSource>, limiter: RateLimiter) -> ProductsFeed {
            ProductsFeed::new(source, Arc::new(limiter), Duration::from_secs(10))
        }
    }

    use feed_helpers::*;

    #[tokio::test(start_paused = true)]
    async fn test_mount_starts_loading_and_settles_with_products() {
        let source = StubSource::body(json!([{ "id": 1, "title": "Backpack", "price": 109.95 }]));
        let feed = feed(source.clone(), RateLimiter::default());

        let mut handle = feed.mount();
        assert!(handle.state().loading);

        let state = handle.settled().await;
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].title, "Backpack");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_keeps_returning_the_final_state() {
        let feed = feed(StubSource::body(json!([{ "id": 2 }])), RateLimiter::default());

        let mut handle = feed.mount();
        let first = handle.settled().await;
        let second = handle.settled().await;

        assert_eq!(first, second);
        assert_eq!(second.products.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_cycle_makes_no_request() {
        let source = StubSource::body(json!([]));
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.is_allowed(PRODUCTS_API_KEY));
        let feed = feed(source.clone(), limiter);

        let state = feed.mount().settled().await;

        assert_eq!(state.error.as_deref(), Some(RATE_LIMITED_MESSAGE));
        assert!(!state.loading);
        assert!(state.products.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_catalog_times_out() {
        let source = StubSource::slow(Duration::from_secs(30));
        let feed = feed(source, RateLimiter::default());

        let started = tokio::time::Instant::now();
        let result = feed.fetch().await;

        assert!(matches!(result, Err(FetchError::Timeout { .. })));
        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_http_status_is_not_shown_to_the_user() {
        let feed = feed(StubSource::status(503), RateLimiter::default());

        let state = feed.mount().settled().await;

        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert!(!state.error.unwrap_or_default().contains("503"));
        assert!(state.products.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_array_body_is_a_format_error() {
        let feed = feed(
            StubSource::body(json!({ "products": [] })),
            RateLimiter::default(),
        );

        let result = feed.fetch().await;

        assert!(matches!(
            result,
            Err(FetchError::Catalog(HttpError::InvalidResponse { .. }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_handle_aborts_the_cycle() {
        let source = StubSource::slow(Duration::from_secs(5));
        let feed = feed(source.clone(), RateLimiter::default());

        let handle = feed.mount();
        tokio::task::yield_now().await;
        let mut rx = handle.subscribe();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(rx.borrow_and_update().loading);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(FetchError::RateLimited.user_message(), RATE_LIMITED_MESSAGE);
        assert_eq!(
            FetchError::Timeout {
                after: Duration::from_secs(10)
            }
            .user_message(),
            TIMEOUT_MESSAGE
        );
        let http = FetchError::from(HttpError::Status {
            url: "https://fakestoreapi.com/products".to_string(),
            status: 500,
            reason: "Internal Server Error".to_string(),
        });
        assert_eq!(http.user_message(), FETCH_FAILED_MESSAGE);
    }
}
