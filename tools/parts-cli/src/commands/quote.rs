//! Quote shipping cost and transit time.

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::{Outcome, QuoteArgs};
use crate::context::Context;
use crate::output::{availability_badge, format_days};
use parts_shipping::quote::ShippingCostResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteReport {
    #[serde(flatten)]
    quote: ShippingCostResult,
    ship_date: NaiveDate,
    estimated_arrival: Option<NaiveDate>,
}

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<Outcome> {
    let ship_date = match args.ship_date {
        Some(ref raw) => parse_ship_date(raw)?,
        None => Local::now().date_naive(),
    };

    let quote = ctx.table().calculate_cost(args.method, &args.country);
    tracing::info!(
        method = %quote.method,
        country = %quote.country,
        available = quote.is_available,
        "quoted shipping"
    );

    let report = QuoteReport {
        estimated_arrival: quote.estimated_arrival(ship_date),
        ship_date,
        quote,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        print_report(&report, ctx);
    }

    Ok(if report.quote.is_available {
        Outcome::Pass
    } else {
        Outcome::Fail
    })
}

fn print_report(report: &QuoteReport, ctx: &Context) {
    let quote = &report.quote;
    let locale = ctx.config.display.locale;

    ctx.output.header(&format!(
        "{} shipping to {}",
        quote.method.label(locale),
        quote.country
    ));
    ctx.output.kv("status", &availability_badge(quote.is_available));

    if !quote.is_available {
        ctx.output
            .warn("No rate for this method and country. Try the other method.");
        return;
    }

    ctx.output.kv("cost", &quote.price().display());
    ctx.output.kv("transit", &format_days(quote.estimated_days));
    ctx.output.kv("ships", &report.ship_date.to_string());
    if let Some(arrival) = report.estimated_arrival {
        ctx.output.kv("arrives", &arrival.to_string());
    }
}

fn parse_ship_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid ship date '{}', expected YYYY-MM-DD", raw))
}
