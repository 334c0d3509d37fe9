//! # Theme System Module
//!
//! Runtime theme selection for the storefront. Three fixed themes exist
//! ([`ThemeId`]); the active one lives in a [`ThemeManager`] and is persisted
//! under the `selectedTheme` storage key.
//!
//! ## Architecture
//!
//! - **[`ThemeManager`]** - owns the active theme and sequences changes
//!   through `Idle -> Committing -> Settling -> Idle`
//! - **[`ThemeProvider`]** / **[`ThemeContext`]** - construct the manager once
//!   and pass it to consumers; [`use_theme`] is the checked accessor
//! - **[`ThemeStyle`]** - palette, typography and layout per theme
//! - **Theme Validation** - [`ThemeIdValidator`] guards identifiers coming
//!   from storage and the command line
//!
//! ## Transition Timing
//!
//! `set_theme` raises `transitioning` immediately, commits and persists after
//! `commit_delay` (150 ms by default) and lowers the flag `settle_delay`
//! (50 ms) later. Renderers may use the flag to animate; nothing else should
//! depend on it.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use storefront::storage::SecureStorage;
//! use storefront::theme::{ThemeId, ThemeProvider, ThemeTiming, use_theme};
//!
//! # async fn example() -> storefront::error::AppResult<()> {
//! let ctx = ThemeProvider::new(SecureStorage::unavailable(), ThemeTiming::default()).provide();
//! let manager = use_theme(&ctx)?;
//!
//! manager.set_theme(ThemeId::Theme2);
//! manager.wait_idle().await;
//! assert_eq!(manager.current(), ThemeId::Theme2);
//! # Ok(())
//! # }
//! ```

pub mod manager;
pub mod provider;
pub mod styles;
pub mod types;
pub mod validation;

pub use manager::ThemeManager;
pub use provider::{ThemeContext, ThemeProvider, use_theme};
pub use styles::{CardFrame, FontFamily, FontWeight, Layout, Palette, ThemeStyle, Typography};
pub use types::{
    THEME_STORAGE_KEY, ThemeId, ThemeOption, ThemeState, ThemeTiming, TransitionPhase,
};
pub use validation::{ThemeIdValidator, ThemeValidationError};
