//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand, Outcome};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::{load_rate_file, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<Outcome> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Path => config_path(ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<Outcome> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(Outcome::Pass);
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[rates]");
    ctx.output.kv(
        "file",
        ctx.config.rates.file.as_deref().unwrap_or("(built-in)"),
    );
    ctx.output.kv("source", ctx.rates_source());

    ctx.output.info("[display]");
    ctx.output.kv("locale", ctx.config.display.locale.as_str());

    ctx.output.info("[logging]");
    ctx.output.kv("filter", &ctx.config.logging.filter);

    Ok(Outcome::Pass)
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<Outcome> {
    let Some(ref path) = ctx.config_path else {
        bail!("No config file found. Run `parts config init` to create one.");
    };

    let mut config = CliConfig::load(path)?;
    set_config_value(&mut config, key, value)?;
    config.save(path)?;

    tracing::info!(path = %path.display(), key, value, "updated config");
    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(Outcome::Pass)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["rates", "file"] if value.is_empty() => config.rates.file = None,
        ["rates", "file"] => config.rates.file = Some(value.to_string()),
        ["display", "locale"] => {
            config.display.locale = value.parse().map_err(anyhow::Error::msg)?
        }
        ["logging", "filter"] => {
            EnvFilter::try_new(value)?;
            config.logging.filter = value.to_string();
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<Outcome> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.info("Left existing config unchanged.");
            return Ok(Outcome::Pass);
        }
    }

    fs::write(&config_path, generate_default_config())?;
    tracing::info!(path = %config_path.display(), "wrote config");
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(Outcome::Pass)
}

async fn config_path(ctx: &Context) -> Result<Outcome> {
    let path = ctx.config_path.as_ref().map(|p| p.display().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
    } else {
        match path {
            Some(path) => println!("{}", path),
            None => ctx
                .output
                .info("No config file found. Run `parts config init` to create one."),
        }
    }

    Ok(Outcome::Pass)
}

async fn validate_config(ctx: &Context) -> Result<Outcome> {
    let base = ctx
        .config_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(ctx.cwd.as_path());
    let errors = check_config(&ctx.config, base);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
        }));
    } else {
        ctx.output.header("Validating configuration");
        for error in &errors {
            ctx.output.error(&format!("Error: {}", error));
        }
        if errors.is_empty() {
            ctx.output.success("Configuration is valid");
        }
    }

    Ok(if errors.is_empty() {
        Outcome::Pass
    } else {
        Outcome::Fail
    })
}

/// Problems with a config whose relative paths resolve against `base`.
fn check_config(config: &CliConfig, base: &Path) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(ref file) = config.rates.file {
        if let Err(e) = load_rate_file(&base.join(file)) {
            errors.push(format!("rates.file: {:#}", e));
        }
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        errors.push(format!("logging.filter: {}", e));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_config_value() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "display.locale", "en").unwrap();
        set_config_value(&mut config, "rates.file", "rates.toml").unwrap();
        set_config_value(&mut config, "logging.filter", "debug").unwrap();
        assert_eq!(config.display.locale, parts_shipping::country::Locale::En);
        assert_eq!(config.rates.file.as_deref(), Some("rates.toml"));
        assert_eq!(config.logging.filter, "debug");

        set_config_value(&mut config, "rates.file", "").unwrap();
        assert_eq!(config.rates.file, None);
    }

    #[test]
    fn test_set_config_value_rejects_bad_input() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "display.locale", "fr").is_err());
        assert!(set_config_value(&mut config, "logging.filter", "parts=notalevel").is_err());
        assert!(set_config_value(&mut config, "build.target", "x").is_err());
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_set_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parts.toml");
        fs::write(&path, generate_default_config()).unwrap();

        let mut config = CliConfig::load(&path).unwrap();
        set_config_value(&mut config, "display.locale", "en").unwrap();
        config.save(&path).unwrap();

        let reloaded = CliConfig::load(&path).unwrap();
        assert_eq!(reloaded.display.locale, parts_shipping::country::Locale::En);
        assert_eq!(reloaded.logging.filter, "warn");
    }

    #[test]
    fn test_default_config_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_config(&CliConfig::default(), dir.path()).is_empty());
    }

    #[test]
    fn test_missing_rates_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.rates.file = Some("missing.toml".to_string());

        let errors = check_config(&config, dir.path());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("rates.file: Failed to read rate file"));
    }

    #[test]
    fn test_bad_filter_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.logging.filter = "parts=notalevel".to_string();

        let errors = check_config(&config, dir.path());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("logging.filter"));
    }
}
