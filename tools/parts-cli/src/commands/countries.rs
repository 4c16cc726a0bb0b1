//! Browse destination countries.

use anyhow::Result;
use console::style;

use super::{CountriesArgs, Outcome};
use crate::context::Context;
use parts_shipping::picker::PickerQuery;

/// Run the countries command.
pub async fn run(args: CountriesArgs, ctx: &Context) -> Result<Outcome> {
    let locale = args.locale.unwrap_or(ctx.config.display.locale);
    let mut query = PickerQuery::new(locale);
    if let Some(method) = args.method {
        query = query.with_method(method);
    }
    if let Some(search) = args.search {
        query = query.with_search(search);
    }

    let groups = ctx.table().picker(&query);
    tracing::debug!(groups = groups.len(), "built country picker");

    if ctx.output.is_json() {
        ctx.output.json(&groups);
        return Ok(Outcome::Pass);
    }

    if groups.is_empty() {
        ctx.output.info("No countries match.");
        return Ok(Outcome::Pass);
    }

    for group in &groups {
        ctx.output.header(&group.label);
        for option in &group.options {
            let line = format!("{}  {}", option.code, option.label);
            if option.disabled {
                ctx.output
                    .list_item(&style(format!("{}  (unavailable)", line)).dim().to_string());
            } else {
                ctx.output.list_item(&line);
            }
        }
    }

    Ok(Outcome::Pass)
}
