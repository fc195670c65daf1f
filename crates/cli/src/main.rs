//! ToyClub CLI - Browse the wholesale catalog and check out via WhatsApp.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! toyclub products
//!
//! # Filter by category, price and age range
//! toyclub products --category dolls --max-price 20 --age 3+
//!
//! # Seed filters from a navigation query string
//! toyclub products --query "category=vehicles"
//!
//! # Show one product with related items
//! toyclub product plush-cuddle-bear
//!
//! # Build an order and print the WhatsApp handoff link
//! toyclub checkout --item plush-cuddle-bear=24 --item veh-turbo-racer
//! ```
//!
//! # Commands
//!
//! - `products` - List products matching filters
//! - `product` - Show product details and related products
//! - `categories` - List catalog categories
//! - `featured` - List featured products
//! - `checkout` - Build a cart and produce the WhatsApp order link
//!
//! Logs go to stderr. Set `RUST_LOG` to change the level and
//! `TOYCLUB_LOG_FORMAT=json` for JSON output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use toyclub_storefront::{StorefrontConfig, StorefrontSession, TracingNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::checkout::ItemArg;

#[derive(Parser)]
#[command(name = "toyclub")]
#[command(author, version, about = "ToyClub wholesale storefront CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching filters
    Products {
        /// Exact category tag (e.g. `dolls`)
        #[arg(short, long)]
        category: Option<String>,

        /// Lowest unit price to include
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Highest unit price to include
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Age-range label to match (e.g. `3+`)
        #[arg(short, long)]
        age: Option<String>,

        /// Navigation query string to seed filters from (e.g. `category=plush`)
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a product and related products
    Product {
        /// Product id
        id: String,
    },
    /// List catalog categories
    Categories,
    /// List featured products
    Featured,
    /// Build a cart and produce the WhatsApp order link
    Checkout {
        /// Item as `id` or `id=quantity`; repeat for more items
        #[arg(short, long = "item", required = true, value_parser = commands::checkout::parse_item)]
        items: Vec<ItemArg>,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "toyclub_cli=info,toyclub_storefront=info".into());

    // JSON logs for machine consumers, text otherwise; both on stderr
    let json_logs = std::env::var("TOYCLUB_LOG_FORMAT").is_ok_and(|v| v == "json");
    let json_layer = json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut session = StorefrontSession::from_config(config, Arc::new(TracingNotifier)).await?;
    let json = cli.json;

    match cli.command {
        Commands::Products {
            category,
            min_price,
            max_price,
            age,
            query,
        } => {
            let filters = commands::products::ListFilters {
                category,
                min_price,
                max_price,
                age,
                query,
            };
            commands::products::list(&session, &filters, json)?;
        }
        Commands::Product { id } => commands::products::show(&session, &id, json)?,
        Commands::Categories => commands::products::categories(&session, json)?,
        Commands::Featured => commands::products::featured(&session, json)?,
        Commands::Checkout { items } => commands::checkout::run(&mut session, &items, json)?,
    }
    Ok(())
}
