//! Configuration for topology snapshots

use crate::logging::LoggingMode;
use crate::normalizer::NormalizeOptions;

/// Library-wide settings
///
/// Read from the environment by [`TopologyConfig::from_env`]; callers (the
/// CLI flags, for instance) may override individual fields afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyConfig {
    /// Keep invisible members in snapshots
    /// Default: false
    pub include_invisible: bool,

    /// How library log events are rendered
    /// Default: silent
    pub log_mode: LoggingMode,
}

impl TopologyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `HOUSEHOLD_INCLUDE_INVISIBLE` and `HOUSEHOLD_LOG_MODE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            include_invisible: lookup("HOUSEHOLD_INCLUDE_INVISIBLE")
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.include_invisible),
            log_mode: lookup("HOUSEHOLD_LOG_MODE")
                .and_then(|value| LoggingMode::from_name(&value))
                .unwrap_or(defaults.log_mode),
        }
    }

    pub fn with_include_invisible(mut self, include_invisible: bool) -> Self {
        self.include_invisible = include_invisible;
        self
    }

    pub fn with_log_mode(mut self, log_mode: LoggingMode) -> Self {
        self.log_mode = log_mode;
        self
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            include_invisible: self.include_invisible,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
