//! Component settings read from the environment.

use parts_observability::{LogFormat, LogLevel};

pub const LOG_LEVEL_VAR: &str = "PARTS_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "PARTS_LOG_FORMAT";

/// Logger settings. Unset or unparseable values fall back to info/JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            level: lookup(LOG_LEVEL_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.level),
            format: lookup(LOG_FORMAT_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.format),
        }
    }
}
