//! Checkout Example
//!
//! Prices the item names given on the command line and prints a receipt.
//!
//! Use `-c` to load a catalog fixture by name instead of the built-in catalog
//! Use `-f` to change the fixtures directory
//!
//! Run with: `cargo run --example checkout -- apple apple orange`

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use checkout::prelude::*;

/// Arguments for the checkout example
#[derive(Debug, Parser)]
struct CheckoutArgs {
    /// Item names, in scan order
    items: Vec<String>,

    /// Catalog fixture to price against
    #[clap(short, long)]
    catalog: Option<String>,

    /// Fixtures directory
    #[clap(short, long, default_value = "./fixtures")]
    fixtures: String,
}

/// Checkout Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = CheckoutArgs::parse();

    let catalog = match args.catalog.as_deref() {
        Some(name) => Fixture::with_base_path(&args.fixtures).load_catalog(name)?,
        None => Catalog::default(),
    };

    let basket: Basket = args.items.into_iter().collect();

    let receipt = price_basket(&catalog, &basket)?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    receipt.write_to(handle)?;

    Ok(())
}
