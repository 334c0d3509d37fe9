use crate::components::Painter;
use crate::theme::ThemeId;
use serde_json::json;
use server::security::log_security_event;
use std::backtrace::Backtrace;
use std::fmt::Display;

/// Audit event recorded for every failure the boundary catches
pub const BOUNDARY_EVENT: &str = "Error Boundary Triggered";

pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_MESSAGE: &str =
    "We're sorry, but something unexpected happened. Please run the command again.";

/// Last stop for failures that escaped the pages.
///
/// Sits outside the theme provider, so the fallback screen always uses the
/// default theme.
#[derive(Debug, Clone, Copy)]
pub struct ErrorBoundary {
    color: bool,
}

impl ErrorBoundary {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Record `error` and return the fallback screen to show instead of the
    /// page that failed
    pub fn catch(&self, component: &str, error: &dyn Display, stack: Option<String>) -> String {
        log::error!("[{component}] {error}");
        log_security_event(
            BOUNDARY_EVENT,
            Some(json!({
                "error": error.to_string(),
                "stack": stack,
                "component": component,
            })),
        );
        self.fallback()
    }

    pub fn fallback(&self) -> String {
        let painter = Painter::new(ThemeId::default(), self.color);
        let lines = [
            painter.error("⚠"),
            painter.title(FALLBACK_TITLE),
            painter.muted(FALLBACK_MESSAGE),
        ];
        let mut screen = lines.join("\n");
        screen.push('\n');
        screen
    }

    /// Route panics through [`catch`](Self::catch) and print the fallback
    /// on stderr
    pub fn install_panic_hook(&self) {
        let boundary = *self;
        std::panic::set_hook(Box::new(move |info| {
            let stack = Backtrace::force_capture().to_string();
            let screen = boundary.catch("panic", info, Some(stack));
            eprint!("{screen}");
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_screen() {
        let screen = ErrorBoundary::new(false).fallback();

        assert!(screen.contains(FALLBACK_TITLE));
        assert!(screen.contains(FALLBACK_MESSAGE));
        assert!(!screen.contains('\x1b'));
    }

    #[test]
    fn test_catch_returns_the_fallback() {
        let boundary = ErrorBoundary::new(false);

        let screen = boundary.catch("dispatch", &"catalog client missing", None);

        assert_eq!(screen, boundary.fallback());
    }
}
