//! CLI execution context.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use parts_shipping::table::RateTable;

use crate::config::{CliConfig, Located};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    table: Cow<'static, RateTable>,
    rates_source: String,
}

impl Context {
    /// Build the context, loading the rate override file if one is configured.
    pub fn new(located: Located, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let Located { config, path } = located;

        let (table, rates_source) = match config.rates.file {
            Some(ref file) => {
                let base = path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(cwd.as_path());
                let rates_path = base.join(file);
                let table = load_rate_file(&rates_path)?;
                (Cow::Owned(table), rates_path.display().to_string())
            }
            None => (Cow::Borrowed(RateTable::builtin()), "built-in".to_string()),
        };

        if let Some(ref p) = path {
            tracing::debug!(path = %p.display(), "using config file");
        }
        tracing::debug!(source = %rates_source, countries = table.len(), "rate table ready");

        Ok(Self {
            config,
            config_path: path,
            output,
            cwd,
            table,
            rates_source,
        })
    }

    /// Rate table for this invocation.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Where the rate table was loaded from.
    pub fn rates_source(&self) -> &str {
        &self.rates_source
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }
}

/// Read and check a TOML rate file.
pub fn load_rate_file(path: &Path) -> Result<RateTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rate file: {}", path.display()))?;
    RateTable::from_toml_str(&content)
        .with_context(|| format!("Invalid rate file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_shipping::method::ShippingMethod;

    #[test]
    fn test_builtin_without_rates_file() {
        let located = Located {
            config: CliConfig::default(),
            path: None,
        };
        let ctx = Context::new(located, Output::new(false, true)).unwrap();
        assert_eq!(ctx.rates_source(), "built-in");
        assert_eq!(ctx.table().len(), RateTable::builtin().len());
    }

    #[test]
    fn test_rates_file_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let rates = r#"
[[countries]]
code = "AE"
name = "United Arab Emirates"
localized_name = "الإمارات العربية المتحدة"
region = "gulf"
air = { cost = 45, days = 1 }
"#;
        std::fs::write(dir.path().join("rates.toml"), rates).unwrap();

        let mut config = CliConfig::default();
        config.rates.file = Some("rates.toml".to_string());
        let located = Located {
            config,
            path: Some(dir.path().join("parts.toml")),
        };

        let ctx = Context::new(located, Output::new(false, true)).unwrap();
        assert_eq!(ctx.table().len(), 1);
        assert_eq!(ctx.table().calculate_cost(ShippingMethod::Air, "AE").base_cost, 45);
        assert!(ctx.rates_source().ends_with("rates.toml"));
    }

    #[test]
    fn test_invalid_rates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.toml");
        let rates = r#"
[[countries]]
code = "AE"
name = "UAE"
localized_name = "الإمارات"
region = "gulf"
"#;
        std::fs::write(&path, rates).unwrap();

        let err = load_rate_file(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Invalid rate file"));
        assert!(message.contains("AE has no shipping rates"));
    }
}
