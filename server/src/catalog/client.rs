use crate::common::HttpError;
use crate::security::log_security_event;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Value, json};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_PRODUCT_LIMIT: u32 = 8;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const JSON_MIME: &str = "application/json";

/// Where the products feed gets its raw catalog payload from.
///
/// Implementations perform exactly one read per call and return the parsed
/// JSON body untouched. Shape validation and coercion happen in
/// [`parse_products`](super::parse_products).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Value, HttpError>;

    /// Human readable target, used in log lines and timeout errors
    fn endpoint(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub product_limit: u32,
    /// Transport deadline for connect, send and body read
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            product_limit: DEFAULT_PRODUCT_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// HTTP client for the public product catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| HttpError::ClientCreation {
                reason: e.to_string(),
            })?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn timeout_error(&self, url: &str) -> HttpError {
        HttpError::Timeout {
            url: url.to_string(),
            seconds: self.config.request_timeout.as_secs(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Value, HttpError> {
        let url = self.products_url();
        log::debug!(
            "Requesting {} products from {url}",
            self.config.product_limit
        );

        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.config.product_limit)])
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.timeout_error(&url)
                } else {
                    HttpError::RequestFailed {
                        url: url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            log_security_event(
                "API Request Failed",
                Some(json!({ "status": status.as_u16(), "statusText": reason })),
            );
            return Err(HttpError::Status {
                url,
                status: status.as_u16(),
                reason,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.timeout_error(&url)
                } else {
                    HttpError::InvalidResponse {
                        expected: "JSON body".to_string(),
                        actual: e.to_string(),
                    }
                }
            })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}?limit={}",
            self.products_url(),
            self.config.product_limit
        )
    }
}
