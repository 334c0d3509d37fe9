use super::app::AppConfig;
use crate::error::AppError;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid catalog.base_url: '{configured}'")]
    BaseUrl { configured: String },
    #[error("Invalid catalog.product_limit: {configured} (min: 1, max: {limit})")]
    ProductLimit { configured: u32, limit: u32 },
    #[error(
        "Invalid catalog.request_timeout_secs: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    RequestTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid rate_limit.max_requests: {configured} (min: 1, max: {limit})")]
    RateLimitRequests { configured: usize, limit: usize },
    #[error(
        "Invalid rate_limit.time_window_ms: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    RateLimitWindow {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid theme.{key}: {configured} (limit: {limit})")]
    ThemeDelay {
        key: &'static str,
        configured: u64,
        limit: u64,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::BaseUrl { configured } => {
                format!(
                    "Catalog URL is not valid!\n\n\
                    Your configured value: '{configured}'\n\n\
                    Please set catalog.base_url in config.toml to an http:// or https:// address."
                )
            }
            ConfigValidationError::ProductLimit { configured, limit } => {
                format!(
                    "Product limit out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: 1 - {limit}\n\n\
                    Please update catalog.product_limit in config.toml."
                )
            }
            ConfigValidationError::RequestTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Request timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update catalog.request_timeout_secs in config.toml."
                )
            }
            ConfigValidationError::RateLimitRequests { configured, limit } => {
                format!(
                    "Rate limit budget out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: 1 - {limit}\n\n\
                    Please update rate_limit.max_requests in config.toml."
                )
            }
            ConfigValidationError::RateLimitWindow {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Rate limit window out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update rate_limit.time_window_ms in config.toml."
                )
            }
            ConfigValidationError::ThemeDelay {
                key,
                configured,
                limit,
            } => {
                format!(
                    "Theme transition delay too long!\n\n\
                    Your configured value: {configured} ms\n\
                    Maximum: {limit} ms\n\n\
                    Please update theme.{key} in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    pub fn into_result(self) -> Result<AppConfig, AppError> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(AppError::Config(msg))
            }
            ConfigLoadResult::ValidationError(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
                Err(AppError::Config(format!(
                    "Configuration validation failed:\n{}",
                    messages.join("\n\n")
                )))
            }
        }
    }
}
