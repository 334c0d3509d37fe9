use crate::components::Painter;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::services::ProductsFeed;
use crate::storage::SecureStorage;
use crate::theme::{ThemeContext, ThemeManager, ThemeProvider, use_theme};
use server::catalog::CatalogClient;
use std::sync::Arc;

/// Everything a page needs, built once at startup and passed down
#[derive(Debug, Clone)]
pub struct AppContext {
    theme: ThemeContext,
    products: ProductsFeed,
    color: bool,
}

impl AppContext {
    pub fn new(theme: ThemeContext, products: ProductsFeed, color: bool) -> Self {
        Self {
            theme,
            products,
            color,
        }
    }

    /// Wire the catalog client, rate limiter and theme provider from `config`
    pub fn from_config(config: &AppConfig, storage: SecureStorage, color: bool) -> AppResult<Self> {
        let client = CatalogClient::new(config.catalog().client_config())?;
        let limiter = Arc::new(config.rate_limit().limiter_config().build());
        let products = ProductsFeed::new(
            Arc::new(client),
            limiter,
            config.catalog().request_timeout(),
        );
        let theme = ThemeProvider::new(storage, config.theme().timing()).provide();

        Ok(Self::new(theme, products, color))
    }

    pub fn theme(&self) -> AppResult<&ThemeManager> {
        use_theme(&self.theme)
    }

    pub fn products(&self) -> &ProductsFeed {
        &self.products
    }

    /// Painter for the theme that is active right now
    pub fn painter(&self) -> AppResult<Painter> {
        Ok(Painter::new(self.theme()?.current(), self.color))
    }
}
