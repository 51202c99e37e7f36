//! Sort key listing command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::search::SortOption;

use crate::context::Context;

#[derive(Serialize)]
struct SortEntry {
    key: String,
    label: &'static str,
}

/// Run the sorts command.
pub fn run(ctx: &Context) -> Result<()> {
    let entries: Vec<SortEntry> = SortOption::ALL
        .iter()
        .map(|option| SortEntry {
            key: option.key(),
            label: option.display_name(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output.header("Sort keys");
    for entry in &entries {
        ctx.output.kv(&entry.key, entry.label);
    }

    Ok(())
}
