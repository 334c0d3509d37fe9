use std::fmt::Display;

/// Application-wide error types for the Storefront shell.
///
/// Fetch-path failures never show up here: the products feed converts them
/// into a user-facing message on its own state. What remains are startup
/// and programming-contract problems.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Io`] - File system failures outside the persistent store
/// - [`State`] - Contract violations, such as reading the theme outside a provider
/// - [`Theme`] - Unknown theme identifiers supplied by the user
/// - [`Catalog`] - Catalog client construction failures
///
/// # Examples
///
/// ```no_run
/// use storefront::error::{AppError, AppResult};
///
/// fn parse_limit(raw: &str) -> AppResult<u32> {
///     raw.parse()
///         .map_err(|e| AppError::Config(format!("Invalid product limit '{raw}': {e}")))
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Io`]: AppError::Io
/// [`State`]: AppError::State
/// [`Theme`]: AppError::Theme
/// [`Catalog`]: AppError::Catalog
#[derive(Debug, Clone)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// # Recovery
    /// - Fall back to default configuration
    /// - Point the user at the offending key in `config.toml`
    Config(String),

    /// File system and I/O failures (log file, data directory).
    Io(String),

    /// Application state contract violations.
    ///
    /// Raised when a consumer asks for state that was never provided, e.g.
    /// calling `use_theme` on a context built without a theme provider.
    State(String),

    /// A theme identifier outside the supported set.
    Theme(String),

    /// The catalog client could not be created.
    Catalog(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Catalog(msg) => write!(f, "Catalog Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<server::common::HttpError> for AppError {
    fn from(err: server::common::HttpError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Config(format!("Failed to initialize logger: {err}"))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
