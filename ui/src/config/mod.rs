//! # Configuration
//!
//! Layered configuration, lowest priority first:
//!
//! 1. defaults embedded from `config.default.toml`
//! 2. the user's `config.toml` (optional, or the file given with `--config`)
//! 3. environment variables `STOREFRONT__<SECTION>__<KEY>`, with `.env`
//!    loaded through `dotenv`
//!
//! The result is validated against [`limits`] before use.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod limits;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "storefront.log";

/// Load and validate the configuration.
///
/// `path` replaces the default `config.toml` lookup; an explicitly given
/// file must exist.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(defaults::USER_CONFIG_FILE).required(false),
    };
    let env_source = Environment::with_prefix(defaults::ENV_PREFIX)
        .prefix_separator(defaults::ENV_SEPARATOR)
        .separator(defaults::ENV_SEPARATOR);

    let config = match Config::builder()
        .add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(errors) = app_config.validate() {
                return ConfigLoadResult::ValidationError(errors);
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn new(level: Option<String>, file: Option<String>) -> Self {
        Self { level, file }
    }

    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }
}
