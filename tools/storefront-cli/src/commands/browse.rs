//! Product listing command.

use anyhow::Result;
use storefront_commerce::config::ResultScope;
use storefront_commerce::search::FilterKey;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{product_cells, PRODUCT_COLUMNS, PRODUCT_HEADER};

/// Run the browse command.
///
/// Events are applied in sidebar order: filter checkboxes, then the search
/// box, then the sort dropdown.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut state = ctx.load_state()?;

    for brand in args.brand {
        state.toggle_filter(FilterKey::Brand, brand.into(), true)?;
    }
    for category in args.category {
        state.toggle_filter(FilterKey::Category, category.into(), true)?;
    }
    for range in args.price {
        state.toggle_filter(FilterKey::Price, range.into(), true)?;
    }
    for range in args.discount {
        state.toggle_filter(FilterKey::DiscountPercentage, range.into(), true)?;
    }

    let recomputes = args.search.is_some() || args.sort.is_some();
    if recomputes
        && !state.filters_used.is_empty()
        && state.config.listing.scope == ResultScope::Catalog
    {
        ctx.output.warn(
            "Search and sort start from the full catalog, so the filters are dropped \
             (set listing.scope = \"selection\" to keep them)",
        );
    }

    if let Some(query) = args.search.as_deref() {
        state.search(query);
    }
    if let Some(key) = args.sort.as_deref() {
        state.sort(key)?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&state.filtered_products);
        return Ok(());
    }

    if state.filtered_products.is_empty() {
        ctx.output.info("Sorry! No results found :(");
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output.table_row(&PRODUCT_HEADER, &PRODUCT_COLUMNS);
    for product in &state.filtered_products {
        let cells = product_cells(product);
        let cols: Vec<&str> = cells.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &PRODUCT_COLUMNS);
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {} of {} product(s)",
        state.filtered_products.len(),
        state.products.len()
    ));

    Ok(())
}
