use crate::error::{AppError, AppResult};
use crate::storage::SecureStorage;
use crate::theme::manager::ThemeManager;
use crate::theme::types::ThemeTiming;

/// Slot through which consumers reach the theme manager.
///
/// Only a [`ThemeProvider`] fills it. An empty slot is what a consumer sees
/// when it was wired up outside the provider.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    manager: Option<ThemeManager>,
}

impl ThemeContext {
    /// A context with no provider above it
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_provided(&self) -> bool {
        self.manager.is_some()
    }
}

/// Single owner of the theme manager's lifecycle
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    storage: SecureStorage,
    timing: ThemeTiming,
}

impl ThemeProvider {
    pub fn new(storage: SecureStorage, timing: ThemeTiming) -> Self {
        Self { storage, timing }
    }

    /// Build the manager (restoring the persisted theme) and hand out the
    /// context consumers read it through
    pub fn provide(self) -> ThemeContext {
        ThemeContext {
            manager: Some(ThemeManager::new(self.storage, self.timing)),
        }
    }
}

/// Read accessor for the theme manager.
///
/// Fails only when `ctx` was not produced by a [`ThemeProvider`].
pub fn use_theme(ctx: &ThemeContext) -> AppResult<&ThemeManager> {
    ctx.manager.as_ref().ok_or_else(|| {
        AppError::State("use_theme must be used within a ThemeProvider".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeId;

    #[test]
    fn test_use_theme_outside_provider_fails() {
        let ctx = ThemeContext::empty();

        let err = use_theme(&ctx).unwrap_err();
        assert!(matches!(err, AppError::State(_)));
        assert!(err.to_string().contains("within a ThemeProvider"));
    }

    #[test]
    fn test_provided_context_exposes_manager() {
        let ctx = ThemeProvider::new(SecureStorage::unavailable(), ThemeTiming::default()).provide();

        assert!(ctx.is_provided());
        assert_eq!(use_theme(&ctx).unwrap().current(), ThemeId::Theme1);
    }

    #[test]
    fn test_context_clones_share_one_manager() {
        let ctx = ThemeProvider::new(SecureStorage::unavailable(), ThemeTiming::default()).provide();
        let copy = ctx.clone();

        let a = use_theme(&ctx).unwrap().subscribe();
        let b = use_theme(&copy).unwrap().subscribe();
        assert!(a.same_channel(&b));
    }
}
