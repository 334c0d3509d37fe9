/// Hard limits applied by `AppConfig::validate`

/// Upper bound for products requested per page view
pub const MAX_PRODUCT_LIMIT: u32 = 100;

/// Request timeout range (seconds)
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Largest admission budget per window
pub const MAX_RATE_LIMIT_REQUESTS: usize = 1000;

/// Sliding window range (milliseconds)
pub const MIN_RATE_LIMIT_WINDOW_MS: u64 = 100;
pub const MAX_RATE_LIMIT_WINDOW_MS: u64 = 3_600_000;

/// Longest theme commit or settle delay (milliseconds)
pub const MAX_THEME_DELAY_MS: u64 = 5_000;
