//! Pool configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Missing or unparsable values fall back to defaults.

use crate::domain::MetadataLimits;
use crate::error::PoolError;

/// Default capacity of the event bus channel.
pub const DEFAULT_EVENT_BUS_CAPACITY: usize = 1024;

/// Top-level configuration.
///
/// Loaded once at startup via [`CoreConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Maximum pool name length in characters.
    pub max_name_len: usize,

    /// Maximum pool description length in characters.
    pub max_description_len: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    pub log_json: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        let limits = MetadataLimits::default();
        Self {
            event_bus_capacity: DEFAULT_EVENT_BUS_CAPACITY,
            max_name_len: limits.max_name_len,
            max_description_len: limits.max_description_len,
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

impl CoreConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] if a loaded value is out of range
    /// (see [`CoreConfig::validate`]).
    pub fn from_env() -> Result<Self, PoolError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] if a loaded value is out of range
    /// (see [`CoreConfig::validate`]).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PoolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            event_bus_capacity: parse_var(
                &lookup,
                "POOL_EVENT_BUS_CAPACITY",
                defaults.event_bus_capacity,
            ),
            max_name_len: parse_var(&lookup, "POOL_MAX_NAME_LEN", defaults.max_name_len),
            max_description_len: parse_var(
                &lookup,
                "POOL_MAX_DESCRIPTION_LEN",
                defaults.max_description_len,
            ),
            log_filter: lookup("POOL_LOG_FILTER").unwrap_or(defaults.log_filter),
            log_json: parse_var_bool(&lookup, "POOL_LOG_JSON", defaults.log_json),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that capacities and limits are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] naming the first offending setting.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.event_bus_capacity == 0 {
            return Err(PoolError::Config(
                "POOL_EVENT_BUS_CAPACITY must be greater than zero".to_string(),
            ));
        }
        if self.max_name_len == 0 {
            return Err(PoolError::Config(
                "POOL_MAX_NAME_LEN must be greater than zero".to_string(),
            ));
        }
        if self.max_description_len == 0 {
            return Err(PoolError::Config(
                "POOL_MAX_DESCRIPTION_LEN must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Metadata limits derived from this configuration.
    #[must_use]
    pub const fn metadata_limits(&self) -> MetadataLimits {
        MetadataLimits {
            max_name_len: self.max_name_len,
            max_description_len: self.max_description_len,
        }
    }
}

/// Parses variable `key` as `T`, returning `default` on missing or invalid
/// values.
fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses variable `key` as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_var_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}
