use thiserror::Error;

/// HTTP-related errors raised while talking to the product catalog.
///
/// Every variant carries enough context for the audit log. None of it is
/// meant for end users: the products feed turns these into a short,
/// generic message before anything reaches the presentation layer.
///
/// # Error Categories
///
/// ## Client Configuration Errors
/// - [`ClientCreation`] - HTTP client initialization failures
///
/// ## Request Execution Errors
/// - [`RequestFailed`] - Transport failures (DNS, TLS, connection reset)
/// - [`Timeout`] - The request did not settle in time
/// - [`Status`] - The server answered with a non-success status
/// - [`InvalidResponse`] - The body was not the expected shape
///
/// # Examples
///
/// ```no_run
/// use server::common::errors::HttpError;
///
/// fn describe(error: &HttpError) -> &'static str {
///     match error {
///         HttpError::Timeout { .. } => "timeout",
///         HttpError::Status { status, .. } if *status >= 500 => "server error",
///         HttpError::Status { .. } => "client error",
///         _ => "other",
///     }
/// }
/// ```
///
/// [`ClientCreation`]: HttpError::ClientCreation
/// [`RequestFailed`]: HttpError::RequestFailed
/// [`Timeout`]: HttpError::Timeout
/// [`Status`]: HttpError::Status
/// [`InvalidResponse`]: HttpError::InvalidResponse
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP client initialization failed.
    ///
    /// Raised when the underlying `reqwest` client cannot be built, usually
    /// because of TLS backend problems or an invalid base URL.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// HTTP request execution failed before a response was received.
    ///
    /// # Fields
    /// - `url`: The URL that was being requested
    /// - `reason`: Detailed description of the failure
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// HTTP request timed out.
    ///
    /// # Fields
    /// - `url`: The URL that timed out
    /// - `seconds`: The timeout duration that was exceeded
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    /// The server answered with a non-2xx status.
    ///
    /// # Fields
    /// - `url`: The URL that was requested
    /// - `status`: Numeric HTTP status code
    /// - `reason`: Canonical reason phrase for the status, if known
    #[error("HTTP error! status: {status} ({reason}) for {url}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// Received response doesn't match expected format.
    ///
    /// # Fields
    /// - `expected`: Description of what was expected
    /// - `actual`: Description of what was actually received
    #[error("Invalid response: expected {expected}, got {actual}")]
    InvalidResponse { expected: String, actual: String },
}

impl HttpError {
    /// Whether this error comes from the request deadline rather than from
    /// the server or the payload.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Timeout { .. })
    }

    /// HTTP status code, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
