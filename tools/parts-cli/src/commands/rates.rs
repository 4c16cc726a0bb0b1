//! Rate file commands.

use std::fs;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::{Outcome, RatesArgs, RatesCommand};
use crate::context::{load_rate_file, Context};
use crate::output::format_days;
use parts_shipping::method::ShippingMethod;
use parts_shipping::table::RateTable;

/// Run the rates command.
pub async fn run(args: RatesArgs, ctx: &Context) -> Result<Outcome> {
    match args.command {
        RatesCommand::Check { file } => check_rates(file.as_deref(), ctx).await,
        RatesCommand::Export { output } => export_rates(output.as_deref(), ctx).await,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    source: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    countries: usize,
    unsupported: usize,
    air_rates: usize,
    land_rates: usize,
}

impl CheckReport {
    fn from_table(source: String, table: &RateTable) -> Self {
        let count = |method| {
            table
                .countries()
                .iter()
                .filter(|c| c.supports_method(method))
                .count()
        };
        Self {
            source,
            valid: true,
            error: None,
            countries: table.len(),
            unsupported: table.countries().iter().filter(|c| !c.is_supported).count(),
            air_rates: count(ShippingMethod::Air),
            land_rates: count(ShippingMethod::Land),
        }
    }

    fn failed(source: String, error: &anyhow::Error) -> Self {
        Self {
            source,
            valid: false,
            error: Some(format!("{:#}", error)),
            countries: 0,
            unsupported: 0,
            air_rates: 0,
            land_rates: 0,
        }
    }
}

async fn check_rates(file: Option<&str>, ctx: &Context) -> Result<Outcome> {
    let report = match file {
        Some(file) => {
            let path = ctx.resolve_path(file);
            let source = path.display().to_string();
            match load_rate_file(&path) {
                Ok(table) => CheckReport::from_table(source, &table),
                Err(e) => CheckReport::failed(source, &e),
            }
        }
        None => CheckReport::from_table(ctx.rates_source().to_string(), ctx.table()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else if let Some(ref error) = report.error {
        ctx.output.error(error);
    } else {
        ctx.output.header(&format!("Rates: {}", report.source));
        ctx.output.kv("countries", &report.countries.to_string());
        ctx.output.kv("unsupported", &report.unsupported.to_string());
        ctx.output.kv("air rates", &report.air_rates.to_string());
        ctx.output.kv("land rates", &report.land_rates.to_string());
        if file.is_none() {
            print_rate_rows(ctx.table(), ctx);
        }
        ctx.output.success("Rate table is valid");
    }

    Ok(if report.valid {
        Outcome::Pass
    } else {
        Outcome::Fail
    })
}

fn print_rate_rows(table: &RateTable, ctx: &Context) {
    let widths = [4, 10, 14, 10, 14];
    ctx.output.info("");
    ctx.output
        .table_row(&["CODE", "AIR", "", "LAND", ""], &widths);
    for country in table.countries() {
        let cell = |method| {
            table
                .rate(method, &country.code)
                .map(|r| {
                    (
                        parts_shipping::Money::from_major(i64::from(r.cost), table.currency())
                            .display(),
                        format_days(r.days),
                    )
                })
                .unwrap_or_else(|| ("-".to_string(), String::new()))
        };
        let (air_cost, air_days) = cell(ShippingMethod::Air);
        let (land_cost, land_days) = cell(ShippingMethod::Land);
        ctx.output.table_row(
            &[&country.code, &air_cost, &air_days, &land_cost, &land_days],
            &widths,
        );
    }
}

async fn export_rates(output: Option<&str>, ctx: &Context) -> Result<Outcome> {
    let content = ctx.table().to_toml_string()?;

    match output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write rate file: {}", path.display()))?;
            tracing::info!(path = %path.display(), countries = ctx.table().len(), "exported rates");
            ctx.output.success(&format!(
                "Exported {} countries to {}",
                ctx.table().len(),
                path.display()
            ));
        }
        None => print!("{}", content),
    }

    Ok(Outcome::Pass)
}
