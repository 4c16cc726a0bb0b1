//! Parts CLI - check shipping rules and manage rate files.
//!
//! Commands:
//! - `parts validate` - Validate a method/country pair
//! - `parts quote` - Price a method/country pair
//! - `parts countries` - Browse destinations by region
//! - `parts rates` - Check or export rate files
//! - `parts config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, CountriesArgs, QuoteArgs, RatesArgs, ValidateArgs};

/// Parts CLI - shipping rules for the spare-parts storefront
#[derive(Parser)]
#[command(name = "parts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a shipping method and destination country
    Validate(ValidateArgs),

    /// Quote shipping cost and transit time
    Quote(QuoteArgs),

    /// List destination countries grouped by region
    Countries(CountriesArgs),

    /// Check or export rate files
    Rates(RatesArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose > 0, cli.json);

    let located = match config::locate(cli.config.as_deref()) {
        Ok(located) => located,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Initialize tracing based on verbosity, falling back to RUST_LOG and then the config.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&located.config.logging.filter)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = match context::Context::new(located, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Some(ref path) = ctx.config_path {
        ctx.output.debug(&format!("config: {}", path.display()));
    }

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(args, &ctx).await,
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Countries(args) => commands::countries::run(args, &ctx).await,
        Commands::Rates(args) => commands::rates::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    match result {
        Ok(commands::Outcome::Pass) => Ok(()),
        Ok(commands::Outcome::Fail) => std::process::exit(1),
        Err(e) => {
            ctx.output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
