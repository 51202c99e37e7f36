//! Filter listing command.

use anyhow::Result;

use crate::context::Context;

/// Run the filters command.
pub fn run(ctx: &Context) -> Result<()> {
    let state = ctx.load_state()?;

    if ctx.output.is_json() {
        ctx.output.json(&state.filters);
        return Ok(());
    }

    for definition in &state.filters {
        ctx.output.header(&definition.name.as_str().to_uppercase());
        let labels = definition.labels();
        if labels.is_empty() {
            ctx.output.info("(no options)");
        }
        for label in labels {
            ctx.output.list_item(label);
        }
    }

    Ok(())
}
