//! Spaza CLI - Catalog inspection, pricing, and order previews.
//!
//! # Usage
//!
//! ```bash
//! # List the configured catalog
//! spaza catalog list
//!
//! # Show one product's axes and price table
//! spaza catalog show 1
//!
//! # Resolve a unit price
//! spaza price 1 --primary Small --secondary Medium --add-on
//!
//! # Render an order message and wa.me link from a draft file
//! spaza order preview --draft booking.yaml
//! ```
//!
//! The catalog is chosen via `SPAZA_CATALOG` / `SPAZA_SAMPLE` (see the
//! storefront crate's config module); with nothing set, the built-in
//! braiding-salon sample is used.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spaza_storefront::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "spaza")]
#[command(author, version, about = "Spaza storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the configured catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Resolve the unit price for a product selection
    Price {
        /// Product id
        id: i32,

        /// Primary-axis label (scent, or braid size)
        #[arg(long)]
        primary: Option<String>,

        /// Secondary-axis label (bottle size, or length/style)
        #[arg(long)]
        secondary: Option<String>,

        /// Attach the add-on service
        #[arg(long)]
        add_on: bool,
    },
    /// Build an order from a draft file
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List every product with its base price
    List,
    /// Show one product in full
    Show {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Run a draft through the full checkout and print the message
    Preview {
        /// Path to the order draft YAML file
        #[arg(short, long)]
        draft: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&config)?,
            CatalogAction::Show { id } => commands::catalog::show(&config, id)?,
        },
        Commands::Price {
            id,
            primary,
            secondary,
            add_on,
        } => commands::price::resolve(&config, id, primary, secondary, add_on)?,
        Commands::Order { action } => match action {
            OrderAction::Preview { draft } => commands::order::preview(&config, &draft)?,
        },
    }
    Ok(())
}
