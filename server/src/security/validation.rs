use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]{1,50}$").expect("name pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("url pattern is valid")
});

/// The string shapes accepted by [`validate_input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Email,
    Name,
    Phone,
    Url,
}

impl InputKind {
    pub const ALL: [InputKind; 4] = [
        InputKind::Email,
        InputKind::Name,
        InputKind::Phone,
        InputKind::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Name => "name",
            InputKind::Phone => "phone",
            InputKind::Url => "url",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            InputKind::Email => &*EMAIL_PATTERN,
            InputKind::Name => &*NAME_PATTERN,
            InputKind::Phone => &*PHONE_PATTERN,
            InputKind::Url => &*URL_PATTERN,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown input kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown input kind '{0}' (expected one of: email, name, phone, url)")]
pub struct UnknownInputKind(pub String);

impl FromStr for InputKind {
    type Err = UnknownInputKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownInputKind(s.to_string()))
    }
}

/// Check `value` against the pattern registered for `kind`.
///
/// Empty input is always rejected. The value is trimmed before matching.
pub fn validate_input(value: &str, kind: InputKind) -> bool {
    if value.is_empty() {
        return false;
    }
    kind.pattern().is_match(value.trim())
}
