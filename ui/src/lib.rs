//! # Storefront UI Library
//!
//! Terminal storefront that renders a product catalog under one of three
//! switchable themes. The selected theme survives restarts.
//!
//! ## Features
//!
//! - Three themes (Minimalist, Dark Pro, Colorful) with staged transitions
//! - Rate-limited catalog fetch with a timeout and sanitized results
//! - Home, About and Contact pages, with a validated contact form
//! - Layered configuration and file logging
//!
//! ## Modules
//!
//! - [`app`] - Startup, command dispatch and page rendering
//! - [`cli`] - Command line definition
//! - [`components`] - Themed building blocks shared by the pages
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`pages`] - Home, About and Contact
//! - [`services`] - The products feed
//! - [`storage`] - Persistent key/value storage
//! - [`theme`] - Theme state, styles and the provider
//! - [`validation`] - The shared validator trait
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod pages;
pub mod services;
pub mod storage;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::{AppError, AppResult};

// Re-export validation trait for broader use
pub use validation::Validator;
