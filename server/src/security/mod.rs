//! Input validation, HTML sanitization and the security audit log.
//!
//! - [`validation`] - fixed patterns for email, name, phone and URL input
//! - [`sanitize`] - text-node escaping for untrusted strings and form data
//! - [`audit`] - development-only security event sink

pub mod audit;
pub mod sanitize;
pub mod validation;

pub use audit::{AUDIT_TARGET, enable_dev_mode, is_audit_enabled, log_security_event};
pub use sanitize::{sanitize_form_data, sanitize_html};
pub use validation::{InputKind, UnknownInputKind, validate_input};
