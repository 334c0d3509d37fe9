use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Default number of admitted requests per key inside one window
pub const DEFAULT_MAX_REQUESTS: usize = 10;

/// Default window width in milliseconds
pub const DEFAULT_TIME_WINDOW_MS: u64 = 60_000;

type RequestLog = HashMap<String, VecDeque<Instant>>;

/// Sliding-window rate limiter keyed by an arbitrary identifier.
///
/// Every key keeps the timestamps of its admitted requests. Timestamps that
/// fall out of the trailing window are evicted lazily on the next check for
/// that key. Clones share the same request log.
pub struct RateLimiter {
    max_requests: usize,
    time_window: Duration,
    requests: Arc<Mutex<RequestLog>>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_requests", &self.max_requests)
            .field("time_window", &self.time_window)
            .field("tracked_keys", &self.tracked_keys())
            .finish()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_REQUESTS,
            Duration::from_millis(DEFAULT_TIME_WINDOW_MS),
        )
    }
}

impl RateLimiter {
    /// Create a limiter admitting `max_requests` per key within `time_window`
    pub fn new(max_requests: usize, time_window: Duration) -> Self {
        Self {
            max_requests,
            time_window,
            requests: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn time_window(&self) -> Duration {
        self.time_window
    }

    /// Admission check. Records the request and returns `true` when the key
    /// still has capacity in the current window, otherwise returns `false`
    /// without recording anything.
    pub fn is_allowed(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut requests = self.lock();
        let window = requests.entry(key.to_string()).or_default();
        self.evict_expired(window, now);

        if window.len() >= self.max_requests {
            log::debug!(
                "Rate limit reached for '{key}' ({} requests in {:?})",
                window.len(),
                self.time_window
            );
            return false;
        }

        window.push_back(now);
        true
    }

    /// Same as [`is_allowed`](Self::is_allowed) but reports how long the
    /// caller has to wait when the key is saturated.
    pub fn check(&self, key: &str) -> Result<(), RateLimitError> {
        if self.is_allowed(key) {
            Ok(())
        } else {
            Err(RateLimitError::TooManyRequests {
                retry_after: self.retry_after(key).unwrap_or(self.time_window),
            })
        }
    }

    /// Capacity left for `key` without recording a request
    pub fn remaining(&self, key: &str) -> usize {
        let now = Instant::now();
        let mut requests = self.lock();
        match requests.get_mut(key) {
            Some(window) => {
                self.evict_expired(window, now);
                self.max_requests.saturating_sub(window.len())
            }
            None => self.max_requests,
        }
    }

    /// Time until the oldest request of a saturated key leaves the window.
    /// `None` when the key can be admitted right now.
    pub fn retry_after(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        let mut requests = self.lock();
        let window = requests.get_mut(key)?;
        self.evict_expired(window, now);

        if window.len() < self.max_requests {
            return None;
        }

        window
            .front()
            .map(|oldest| (*oldest + self.time_window).saturating_duration_since(now))
    }

    /// Forget every request recorded for `key`
    pub fn reset(&self, key: &str) {
        self.lock().remove(key);
    }

    fn tracked_keys(&self) -> usize {
        self.lock().len()
    }

    fn evict_expired(&self, window: &mut VecDeque<Instant>, now: Instant) {
        while let Some(oldest) = window.front() {
            if now.saturating_duration_since(*oldest) >= self.time_window {
                window.pop_front();
            } else {
                break;
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RequestLog> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            max_requests: self.max_requests,
            time_window: self.time_window,
            requests: self.requests.clone(),
        }
    }
}

/// Rate limiting errors
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Too many requests, retry after {retry_after:?}")]
    TooManyRequests { retry_after: Duration },
}

/// Rate limiter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Maximum admitted requests per key inside one window
    pub max_requests: usize,
    /// Window width in milliseconds
    pub time_window_ms: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            time_window_ms: DEFAULT_TIME_WINDOW_MS,
        }
    }
}

impl RateLimiterConfig {
    /// Create a rate limiter from this configuration
    pub fn build(&self) -> RateLimiter {
        RateLimiter::new(
            self.max_requests,
            Duration::from_millis(self.time_window_ms),
        )
    }
}
