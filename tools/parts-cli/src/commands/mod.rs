//! CLI command implementations.

pub mod config;
pub mod countries;
pub mod quote;
pub mod rates;
pub mod validate;

use clap::{Args, Subcommand};
use parts_shipping::country::Locale;
use parts_shipping::method::ShippingMethod;

/// How a command finished. `Fail` exits with status 1 without printing an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Shipping method as submitted (air or land). Empty counts as missing.
    #[arg(default_value = "")]
    pub method: String,

    /// Destination country code as submitted (e.g. AE).
    #[arg(default_value = "")]
    pub country: String,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Shipping method (air or land).
    pub method: ShippingMethod,

    /// Destination country code.
    pub country: String,

    /// Ship date used for the arrival estimate (YYYY-MM-DD, default today).
    #[arg(long)]
    pub ship_date: Option<String>,
}

/// Arguments for the countries command.
#[derive(Args)]
pub struct CountriesArgs {
    /// Disable countries that do not offer this method.
    #[arg(short, long)]
    pub method: Option<ShippingMethod>,

    /// Filter by code or name.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Display language (ar or en). Defaults to the config.
    #[arg(short, long)]
    pub locale: Option<Locale>,
}

/// Arguments for the rates command.
#[derive(Args)]
pub struct RatesArgs {
    #[command(subcommand)]
    pub command: RatesCommand,
}

#[derive(Subcommand)]
pub enum RatesCommand {
    /// Check a rate file for errors.
    Check {
        /// Rate file path (default: the configured rate table).
        file: Option<String>,
    },
    /// Write the active rate table as TOML.
    Export {
        /// Output file path (default: stdout).
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Set a config value and save the config file.
    Set {
        /// Config key (dot-separated, e.g. display.locale).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config file in use.
    Path,
    /// Validate the config file.
    Validate,
}
