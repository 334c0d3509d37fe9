pub mod errors;
pub mod rate_limiter;

pub use errors::HttpError;
pub use rate_limiter::{RateLimitError, RateLimiter, RateLimiterConfig};
