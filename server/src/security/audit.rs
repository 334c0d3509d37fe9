use crate::utils::EnvUtils;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log target every security event is written under
pub const AUDIT_TARGET: &str = "security";

static DEV_MODE_OVERRIDE: AtomicBool = AtomicBool::new(false);

/// Force the audit log on, regardless of the environment.
///
/// The application shell calls this when its configuration enables
/// development mode.
pub fn enable_dev_mode(enabled: bool) {
    DEV_MODE_OVERRIDE.store(enabled, Ordering::Relaxed);
}

/// Whether security events are currently written to the log
pub fn is_audit_enabled() -> bool {
    DEV_MODE_OVERRIDE.load(Ordering::Relaxed) || EnvUtils::is_dev_mode()
}

/// Record a security-relevant event.
///
/// Only active in development mode, a no-op otherwise. Nothing is persisted.
pub fn log_security_event(event: &str, details: Option<Value>) {
    if !is_audit_enabled() {
        return;
    }

    match details {
        Some(details) => log::warn!(target: AUDIT_TARGET, "Security Event: {event} {details}"),
        None => log::warn!(target: AUDIT_TARGET, "Security Event: {event}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_override_enables_audit() {
        enable_dev_mode(true);
        assert!(is_audit_enabled());
        log_security_event("API Error", Some(json!({ "error": "boom" })));
        log_security_event("Error Boundary Triggered", None);
    }
}
