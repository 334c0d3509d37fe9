use crate::theme::validation::{ThemeIdValidator, ThemeValidationError};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Storage key holding the persisted theme identifier
pub const THEME_STORAGE_KEY: &str = "selectedTheme";

pub const DEFAULT_COMMIT_DELAY_MS: u64 = 150;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// One of the three supported themes. No other value is ever legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Theme1,
    Theme2,
    Theme3,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Theme1, ThemeId::Theme2, ThemeId::Theme3];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Theme1 => "theme1",
            ThemeId::Theme2 => "theme2",
            ThemeId::Theme3 => "theme3",
        }
    }

    /// Name shown in the theme selector
    pub fn label(&self) -> &'static str {
        match self {
            ThemeId::Theme1 => "Minimalist",
            ThemeId::Theme2 => "Dark Pro",
            ThemeId::Theme3 => "Colorful",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeIdValidator.validate(s)?;
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ThemeValidationError::UnknownTheme {
                name: s.to_string(),
            })
    }
}

/// Snapshot of the theme state as seen by consumers.
///
/// `transitioning` is only a presentation hint for exit/enter animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub current: ThemeId,
    pub transitioning: bool,
}

/// Where the manager is in the staged commit of a theme change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Flag raised, waiting to commit `target`
    Committing { target: ThemeId },
    /// Committed, waiting to lower the flag
    Settling,
}

/// Delays of the staged theme change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTiming {
    pub commit_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for ThemeTiming {
    fn default() -> Self {
        Self {
            commit_delay: Duration::from_millis(DEFAULT_COMMIT_DELAY_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

impl ThemeTiming {
    /// Total time from `set_theme` until the flag drops again
    pub fn total(&self) -> Duration {
        self.commit_delay + self.settle_delay
    }
}

/// Entry of the theme selector: (identifier, label)
pub type ThemeOption = (ThemeId, &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip_through_strings() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        for raw in ["", "theme4", "Theme1", " theme1", "dark"] {
            assert!(raw.parse::<ThemeId>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_identifiers() {
        assert_eq!(serde_json::to_string(&ThemeId::Theme2).unwrap(), "\"theme2\"");
        let parsed: ThemeId = serde_json::from_str("\"theme3\"").unwrap();
        assert_eq!(parsed, ThemeId::Theme3);
    }

    #[test]
    fn test_default_timing() {
        let timing = ThemeTiming::default();
        assert_eq!(timing.commit_delay, Duration::from_millis(150));
        assert_eq!(timing.settle_delay, Duration::from_millis(50));
        assert_eq!(timing.total(), Duration::from_millis(200));
    }
}
