use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use crate::theme::ThemeTiming;
use serde::Deserialize;
use server::catalog::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_PRODUCT_LIMIT};
use server::common::RateLimiterConfig;
use server::common::rate_limiter::{DEFAULT_MAX_REQUESTS, DEFAULT_TIME_WINDOW_MS};
use std::path::PathBuf;
use std::time::Duration;

use crate::theme::types::{DEFAULT_COMMIT_DELAY_MS, DEFAULT_SETTLE_DELAY_MS};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Catalog endpoint settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CatalogSection {
    base_url: Option<String>,
    product_limit: Option<u32>,
    request_timeout_secs: Option<u64>,
}

impl CatalogSection {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn product_limit(&self) -> u32 {
        self.product_limit.unwrap_or(DEFAULT_PRODUCT_LIMIT)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs())
    }

    pub fn client_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url().to_string(),
            product_limit: self.product_limit(),
            request_timeout: self.request_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RateLimitSection {
    max_requests: Option<usize>,
    time_window_ms: Option<u64>,
}

impl RateLimitSection {
    pub fn max_requests(&self) -> usize {
        self.max_requests.unwrap_or(DEFAULT_MAX_REQUESTS)
    }

    pub fn time_window_ms(&self) -> u64 {
        self.time_window_ms.unwrap_or(DEFAULT_TIME_WINDOW_MS)
    }

    pub fn limiter_config(&self) -> RateLimiterConfig {
        RateLimiterConfig {
            max_requests: self.max_requests(),
            time_window_ms: self.time_window_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeSection {
    commit_delay_ms: Option<u64>,
    settle_delay_ms: Option<u64>,
}

impl ThemeSection {
    pub fn commit_delay_ms(&self) -> u64 {
        self.commit_delay_ms.unwrap_or(DEFAULT_COMMIT_DELAY_MS)
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS)
    }

    pub fn timing(&self) -> ThemeTiming {
        ThemeTiming {
            commit_delay: Duration::from_millis(self.commit_delay_ms()),
            settle_delay: Duration::from_millis(self.settle_delay_ms()),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StorageSection {
    path: Option<PathBuf>,
}

impl StorageSection {
    /// Explicit storage file, if configured. `None` means the platform data
    /// directory.
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    dev_mode: Option<bool>,

    #[serde(default)]
    catalog: CatalogSection,
    #[serde(default)]
    rate_limit: RateLimitSection,
    #[serde(default)]
    theme: ThemeSection,
    #[serde(default)]
    storage: StorageSection,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let base_url = self.catalog.base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(ConfigValidationError::BaseUrl {
                configured: base_url.to_string(),
            });
        }

        let limit = self.catalog.product_limit();
        if limit == 0 || limit > MAX_PRODUCT_LIMIT {
            errors.push(ConfigValidationError::ProductLimit {
                configured: limit,
                limit: MAX_PRODUCT_LIMIT,
            });
        }

        let timeout = self.catalog.request_timeout_secs();
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::RequestTimeout {
                configured: timeout,
                min_limit: MIN_REQUEST_TIMEOUT_SECS,
                max_limit: MAX_REQUEST_TIMEOUT_SECS,
            });
        }

        let max_requests = self.rate_limit.max_requests();
        if max_requests == 0 || max_requests > MAX_RATE_LIMIT_REQUESTS {
            errors.push(ConfigValidationError::RateLimitRequests {
                configured: max_requests,
                limit: MAX_RATE_LIMIT_REQUESTS,
            });
        }

        let window = self.rate_limit.time_window_ms();
        if !(MIN_RATE_LIMIT_WINDOW_MS..=MAX_RATE_LIMIT_WINDOW_MS).contains(&window) {
            errors.push(ConfigValidationError::RateLimitWindow {
                configured: window,
                min_limit: MIN_RATE_LIMIT_WINDOW_MS,
                max_limit: MAX_RATE_LIMIT_WINDOW_MS,
            });
        }

        for (key, configured) in [
            ("commit_delay_ms", self.theme.commit_delay_ms()),
            ("settle_delay_ms", self.theme.settle_delay_ms()),
        ] {
            if configured > MAX_THEME_DELAY_MS {
                errors.push(ConfigValidationError::ThemeDelay {
                    key,
                    configured,
                    limit: MAX_THEME_DELAY_MS,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode.unwrap_or(false)
    }

    // Configuration section accessors
    pub fn catalog(&self) -> &CatalogSection {
        &self.catalog
    }

    pub fn rate_limit(&self) -> &RateLimitSection {
        &self.rate_limit
    }

    pub fn theme(&self) -> &ThemeSection {
        &self.theme
    }

    pub fn storage(&self) -> &StorageSection {
        &self.storage
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
