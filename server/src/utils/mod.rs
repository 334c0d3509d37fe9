//! # Server Utilities Module
//!
//! Environment variable helpers shared by the catalog client, the audit log
//! and the application shell.
//!
//! ```no_run
//! use server::utils::EnvUtils;
//!
//! // Warns about missing variables, never fails
//! EnvUtils::validate_environment();
//!
//! let mode = EnvUtils::get_optional_var("STOREFRONT_ENV")
//!     .unwrap_or_else(|| "production".to_string());
//! ```

pub mod env;

pub use env::{EnvUtils, EnvVarError};
