//! Storefront CLI - Browse a product catalog and fill a cart from the terminal.
//!
//! Commands:
//! - `storefront browse` - List products with filters, search and sort
//! - `storefront filters` - Show the sidebar filters
//! - `storefront sorts` - Show the sort keys
//! - `storefront cart` - Replay add-to-cart presses and show the cart

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CartArgs};

/// Storefront CLI - Browse a catalog and manage a cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog JSON file (overrides `catalog.path`)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters, search and sort applied
    Browse(BrowseArgs),

    /// Show the filters offered for the catalog
    Filters,

    /// Show the available sort keys
    Sorts,

    /// Add products to a cart and show the result
    Cart(CartArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Filters => commands::filters::run(&ctx),
        Commands::Sorts => commands::sorts::run(&ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
