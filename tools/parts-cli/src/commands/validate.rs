//! Validate a shipping method and destination country.

use anyhow::Result;

use super::{Outcome, ValidateArgs};
use crate::context::Context;

/// Run the validate command.
pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<Outcome> {
    let result = ctx.table().validate_fields(&args.method, &args.country);
    tracing::info!(
        method = %args.method,
        country = %args.country,
        valid = result.is_valid,
        "validated shipping fields"
    );

    if ctx.output.is_json() {
        ctx.output.json(&result);
    } else if result.is_valid {
        ctx.output
            .success(&format!("{} to {} is valid", args.method, args.country));
    } else {
        ctx.output.header("Shipping fields rejected");
        if let Some(ref msg) = result.errors.shipping_method {
            ctx.output.kv("shippingMethod", msg);
        }
        if let Some(ref msg) = result.errors.destination_country {
            ctx.output.kv("destinationCountry", msg);
        }
    }

    Ok(if result.is_valid {
        Outcome::Pass
    } else {
        Outcome::Fail
    })
}
