//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parts_shipping::country::Locale;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["parts.toml", ".parts.toml", "parts.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Rate table source.
    #[serde(default)]
    pub rates: RatesConfig,

    /// Display preferences.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where the rate table comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Rate override file, relative to the config file. Built-in rates when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Language for country and region names.
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when neither `-v` nor `RUST_LOG` is set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// A loaded config and the file it came from.
#[derive(Debug, Clone)]
pub struct Located {
    pub config: CliConfig,
    pub path: Option<PathBuf>,
}

/// Load the config named on the command line, or search for one upwards
/// from the working directory. No config file means defaults.
pub fn locate(explicit: Option<&str>) -> Result<Located> {
    if let Some(path) = explicit {
        let path = PathBuf::from(path);
        let config = CliConfig::load(&path)?;
        return Ok(Located {
            config,
            path: Some(path),
        });
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    match find_config(&cwd) {
        Some(path) => Ok(Located {
            config: CliConfig::load(&path)?,
            path: Some(path),
        }),
        None => Ok(Located {
            config: CliConfig::default(),
            path: None,
        }),
    }
}

/// Find a config file in `start` or any of its parents.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Generate a default parts.toml config file.
pub fn generate_default_config() -> String {
    r#"# Parts CLI configuration

[rates]
# Override the built-in rate table (path relative to this file).
# Create one with `parts rates export --output rates.toml`.
# file = "rates.toml"

[display]
# Language for country and region names: "ar" or "en".
locale = "ar"

[logging]
# tracing filter used when -v and RUST_LOG are not given.
filter = "warn"
"#
    .to_string()
}
