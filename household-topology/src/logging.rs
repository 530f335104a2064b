//! Logging setup for applications embedding the topology library
//!
//! The library itself only emits `tracing` events. Binaries pick how those
//! are rendered by initializing a subscriber once, early. Everything goes to
//! stderr so that stdout stays free for command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// How log events are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggingMode {
    /// No output
    #[default]
    Silent,
    /// Compact lines at info level
    Development,
    /// Decoder and normalizer internals at trace level, with source locations
    Debug,
    /// One JSON object per event, for log collectors
    Json,
}

impl LoggingMode {
    /// Parse a mode name: "silent", "development", "debug" or "json".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(Self::Silent),
            "development" | "dev" => Some(Self::Development),
            "debug" => Some(Self::Debug),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Filter used when neither `HOUSEHOLD_LOG_LEVEL` nor `RUST_LOG` is set
    fn default_directives(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Development | Self::Json => "info",
            Self::Debug => "info,household_topology=trace",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

/// Install a global subscriber for `mode`.
///
/// # Environment Variables
///
/// - `HOUSEHOLD_LOG_LEVEL`: filter directives (error, warn, info, debug, trace)
/// - `RUST_LOG`: used when `HOUSEHOLD_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    if mode == LoggingMode::Silent {
        return Ok(());
    }
    if tracing::dispatcher::has_been_set() {
        return Err(LoggingError::AlreadyInitialized);
    }

    let filter = EnvFilter::new(filter_directives(mode, |key| std::env::var(key).ok()));
    let registry = Registry::default().with(filter);

    let installed = match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
            .try_init(),
        LoggingMode::Debug => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LoggingMode::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json().flatten_event(true))
            .try_init(),
    };

    installed.map_err(|e| LoggingError::Subscriber(e.to_string()))
}

/// Initialize logging from `HOUSEHOLD_LOG_MODE`, defaulting to silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var("HOUSEHOLD_LOG_MODE")
        .ok()
        .and_then(|name| LoggingMode::from_name(&name))
        .unwrap_or_default();

    init_logging(mode)
}

// HOUSEHOLD_LOG_LEVEL, then RUST_LOG, then the mode's default
fn filter_directives(mode: LoggingMode, lookup: impl Fn(&str) -> Option<String>) -> String {
    ["HOUSEHOLD_LOG_LEVEL", "RUST_LOG"]
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| mode.default_directives().to_string())
}
