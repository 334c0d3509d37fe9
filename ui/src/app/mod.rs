//! # Application Module
//!
//! Startup and command handling for the storefront binary.
//!
//! - [`boundary`] - last-resort failure handling and the fallback screen
//! - [`lifecycle`] - configuration, logging, storage and context setup
//! - [`context`] - the [`AppContext`] handed to every page
//! - [`update`] - command dispatch, including theme changes
//! - [`view`] - full-screen page rendering

pub mod boundary;
pub mod context;
pub mod lifecycle;
pub mod update;
pub mod view;

pub use boundary::ErrorBoundary;
pub use context::AppContext;
pub use lifecycle::{ApplicationLifecycle, StartupOptions};
pub use update::dispatch;
pub use view::render_page;
