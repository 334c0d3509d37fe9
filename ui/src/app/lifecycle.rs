use crate::app::boundary::ErrorBoundary;
use crate::app::context::AppContext;
use crate::config::{self, AppConfig};
use crate::error::AppResult;
use crate::logger::setup_logger;
use crate::storage::{FileStore, MemoryStore, SecureStorage};
use server::security::enable_dev_mode;
use server::utils::EnvUtils;
use std::path::Path;
use std::sync::Arc;

/// Startup options coming from the command line
#[derive(Debug, Clone, Default)]
pub struct StartupOptions<'a> {
    pub config_path: Option<&'a Path>,
    pub ephemeral: bool,
    pub color: bool,
}

/// Application startup: configuration, logging with the panic boundary,
/// audit mode, storage and the shared context, in that order
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    pub fn initialize(options: &StartupOptions<'_>) -> AppResult<AppContext> {
        let config = config::load_config(options.config_path).into_result()?;
        setup_logger(config.logging())?;
        ErrorBoundary::new(options.color).install_panic_hook();

        log::info!("Starting storefront {}", env!("CARGO_PKG_VERSION"));
        EnvUtils::validate_environment();

        if config.dev_mode() {
            enable_dev_mode(true);
            log::info!("Development mode enabled from configuration");
        }

        let storage = Self::initialize_storage(&config, options.ephemeral);
        AppContext::from_config(&config, storage, options.color)
    }

    /// Pick the persistence backend. Without a data directory the storefront
    /// still runs; it just forgets the theme on exit.
    pub fn initialize_storage(config: &AppConfig, ephemeral: bool) -> SecureStorage {
        if ephemeral {
            log::info!("Ephemeral mode: preferences are kept in memory");
            return SecureStorage::new(Arc::new(MemoryStore::new()));
        }

        let path = match config.storage().path() {
            Some(path) => path.clone(),
            None => match FileStore::default_path() {
                Some(path) => path,
                None => {
                    log::warn!("No data directory available, theme choice will not persist");
                    return SecureStorage::unavailable();
                }
            },
        };

        log::debug!("Persisting preferences to {}", path.display());
        SecureStorage::new(Arc::new(FileStore::new(path)))
    }
}
