use crate::error::AppError;
use crate::theme::types::ThemeId;
use crate::validation::Validator;

/// Longest string worth comparing against the theme identifiers
const MAX_THEME_NAME_LEN: usize = 16;

/// Validation errors specific to theme operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    InvalidThemeName { name: String, reason: String },
    UnknownTheme { name: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        let options = ThemeId::ALL
            .iter()
            .map(|id| format!("{id} ({})", id.label()))
            .collect::<Vec<_>>()
            .join(", ");

        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Available themes: {options}"
                )
            }
            ThemeValidationError::UnknownTheme { name } => {
                format!(
                    "Unknown theme: '{name}'\n\n\
                    Available themes: {options}"
                )
            }
        }
    }
}

impl std::fmt::Display for ThemeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                write!(f, "invalid theme name '{name}': {reason}")
            }
            ThemeValidationError::UnknownTheme { name } => write!(f, "unknown theme '{name}'"),
        }
    }
}

impl std::error::Error for ThemeValidationError {}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

/// Validator for raw theme identifiers read from storage or typed by the user
pub struct ThemeIdValidator;

impl Validator<str> for ThemeIdValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeValidationError::InvalidThemeName {
                name: input.to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }

        if input.len() > MAX_THEME_NAME_LEN {
            return Err(ThemeValidationError::InvalidThemeName {
                name: input.chars().take(MAX_THEME_NAME_LEN).collect(),
                reason: format!("Name too long (max {MAX_THEME_NAME_LEN} characters)"),
            });
        }

        if !input.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ThemeValidationError::InvalidThemeName {
                name: input.to_string(),
                reason: "Name contains invalid characters (only ASCII letters and digits allowed)"
                    .to_string(),
            });
        }

        if !ThemeId::ALL.iter().any(|id| id.as_str() == input) {
            return Err(ThemeValidationError::UnknownTheme {
                name: input.to_string(),
            });
        }

        Ok(())
    }
}
