/// Default configuration embedded in the binary.
///
/// Loaded as the lowest-priority source, so a user `config.toml` and the
/// environment only need to name what they change.
pub const DEFAULT_CONFIG: &str = include_str!("../../../config.default.toml");

/// Name of the optional user configuration file
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Prefix of configuration environment variables, e.g.
/// `STOREFRONT__CATALOG__BASE_URL`
pub const ENV_PREFIX: &str = "STOREFRONT";

pub const ENV_SEPARATOR: &str = "__";
