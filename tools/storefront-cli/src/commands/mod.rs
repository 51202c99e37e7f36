//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod filters;
pub mod sorts;

use clap::Args;
use storefront_commerce::search::NumericRange;
use storefront_commerce::ProductId;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Brand to include (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Category to include (repeatable).
    #[arg(short = 'C', long)]
    pub category: Vec<String>,

    /// Price band as MIN:MAX, bounds exclusive (repeatable).
    #[arg(short, long, value_name = "MIN:MAX")]
    pub price: Vec<NumericRange>,

    /// Discount band as MIN:MAX, bounds exclusive (repeatable).
    #[arg(short, long, value_name = "MIN:MAX")]
    pub discount: Vec<NumericRange>,

    /// Search text matched against title, brand and category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key, e.g. price-ascending (see `storefront sorts`).
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Email to sign in with. Without it every add is refused.
    #[arg(short, long)]
    pub email: Option<String>,

    /// Product ID to add, once per press (repeatable).
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<ProductId>,
}
