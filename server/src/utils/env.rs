//! Environment variable utilities for safe and validated access.
//!
//! Besides the generic helpers this module owns the two variables the
//! storefront itself looks at: the informational mode indicator checked at
//! startup and the development flag that turns the security audit log on.

use thiserror::Error;

/// Informational mode indicator (`development`, `production`, ...)
pub const STOREFRONT_ENV: &str = "STOREFRONT_ENV";

/// When set to a non-empty value, security audit events are written to the log
pub const STOREFRONT_DEV: &str = "STOREFRONT_DEV";

/// Variables whose absence is reported by [`EnvUtils::validate_environment`]
pub const EXPECTED_VARS: &[&str] = &[STOREFRONT_ENV];

/// Errors that can occur when accessing environment variables.
#[derive(Debug, Error)]
pub enum EnvVarError {
    /// Environment variable is not set
    #[error(
        "Environment variable '{name}' not found. Please set this variable in your .env file or environment."
    )]
    NotFound { name: String },

    /// Environment variable contains invalid UTF-8 characters
    #[error(
        "Environment variable '{name}' contains invalid UTF-8 characters. Please check the value."
    )]
    InvalidUtf8 { name: String },

    /// Environment variable is set but contains only whitespace or is empty
    #[error("Environment variable '{name}' is empty. Please provide a valid value.")]
    Empty { name: String },
}

/// Utility functions for safe environment variable handling.
///
/// All lookups trim whitespace and treat blank values as missing.
///
/// # Examples
///
/// ```no_run
/// use server::utils::EnvUtils;
///
/// if EnvUtils::has_non_empty_var("STOREFRONT_ENV") {
///     let mode = EnvUtils::get_validated_var("STOREFRONT_ENV")?;
///     println!("Running in {mode} mode");
/// }
/// ```
pub struct EnvUtils;

impl EnvUtils {
    /// Checks if an environment variable exists and has a non-empty value.
    pub fn has_non_empty_var(name: &str) -> bool {
        match std::env::var(name) {
            Ok(value) => !value.trim().is_empty(),
            Err(_) => false,
        }
    }

    /// Gets an environment variable with validation.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError`] if:
    /// - The variable is not set ([`EnvVarError::NotFound`])
    /// - The variable is empty or contains only whitespace ([`EnvVarError::Empty`])
    /// - The variable contains invalid UTF-8 ([`EnvVarError::InvalidUtf8`])
    pub fn get_validated_var(name: &str) -> Result<String, EnvVarError> {
        match std::env::var(name) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(EnvVarError::Empty {
                        name: name.to_string(),
                    })
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(std::env::VarError::NotPresent) => Err(EnvVarError::NotFound {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(EnvVarError::InvalidUtf8 {
                name: name.to_string(),
            }),
        }
    }

    /// Gets an optional environment variable, `None` when missing or blank.
    pub fn get_optional_var(name: &str) -> Option<String> {
        Self::get_validated_var(name).ok()
    }

    /// Startup check for the expected variables.
    ///
    /// Missing variables only produce a warning; the check never fails and
    /// does not change runtime behavior.
    pub fn validate_environment() -> bool {
        for name in Self::missing_vars() {
            log::warn!("Missing environment variable: {name}");
        }
        true
    }

    /// The entries of [`EXPECTED_VARS`] that are not set
    pub fn missing_vars() -> Vec<&'static str> {
        EXPECTED_VARS
            .iter()
            .copied()
            .filter(|name| !Self::has_non_empty_var(name))
            .collect()
    }

    /// Whether the development flag is present in the environment
    pub fn is_dev_mode() -> bool {
        Self::has_non_empty_var(STOREFRONT_DEV)
    }
}
