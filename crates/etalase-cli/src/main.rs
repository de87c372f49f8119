//! etalase - product catalog command line
//!
//! Usage:
//!   etalase product 1                # One product as JSON
//!   etalase products --limit 10      # First 10 products of the listing
//!   etalase cards --limit 5          # Display cards with Rupiah prices
//!   etalase carts                    # Cart summary
//!   etalase rupiah 1000              # Convert a price to Rupiah
//!   etalase discount 100 20          # Price after a 20% discount
//!   etalase --offline carts          # Use the built-in sample catalog
//!   etalase --no-config rupiah 1     # Ignore ~/.config/etalase/config.json

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use etalase_core::cart::{distinct_products, total_quantity};
use etalase_core::{
    count_discount, fetch_carts_data, fetch_products_data, ApiClient, Catalog, Config,
    StaticCatalog,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "etalase")]
#[command(about = "Browse products and carts with Rupiah pricing", long_about = None)]
struct Args {
    /// API base URL (overrides config and ETALASE_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Rupiah per unit of catalog price
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Skip the configuration file; use defaults, environment and flags only
    #[arg(long, global = true)]
    no_config: bool,

    /// Use the built-in sample catalog instead of the network
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one product
    Product { id: u64 },

    /// List products
    Products {
        /// Show at most this many
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List product cards with formatted prices
    Cards {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Summarize cart entries
    Carts,

    /// Convert a catalog price to Rupiah
    Rupiah {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Apply a percentage discount to a price
    Discount {
        #[arg(allow_hyphen_values = true)]
        price: f64,
        percent: f64,
    },
}

#[derive(Serialize)]
struct CartSummary {
    entries: usize,
    distinct_products: usize,
    total_quantity: u64,
}

impl Args {
    fn load_config(&self) -> Result<Config> {
        let config = if self.no_config {
            Config::load_from(None)
        } else if let Some(path) = &self.config {
            Config::load_from(Some(path.as_path()))
        } else {
            Config::load()
        };
        config.context("failed to load configuration")
    }

    /// Flags win over file and environment configuration
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(rate) = self.rate {
            config.exchange_rate = rate;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = args.load_config()?;
    args.apply(&mut config);
    config.validate()?;

    let source: Arc<dyn Catalog> = if args.offline {
        tracing::info!("using built-in sample catalog");
        Arc::new(StaticCatalog::sample())
    } else {
        Arc::new(ApiClient::new(&config).context("failed to build HTTP client")?)
    };

    run(&args.command, &config, source.as_ref()).await
}

async fn run(command: &Command, config: &Config, source: &dyn Catalog) -> Result<()> {
    match command {
        Command::Product { id } => {
            let product = fetch_products_data(source, Some(*id))
                .await
                .with_context(|| format!("failed to fetch product {id}"))?;
            print_json(&product)
        }
        Command::Products { limit } => {
            let list = fetch_products_data(source, None)
                .await
                .context("failed to fetch products")?
                .into_list()
                .context("expected a product listing")?;
            let shown = list.first(limit.unwrap_or(list.products.len()));
            tracing::debug!(shown = shown.len(), total = list.total, "listing");
            print_json(&shown)
        }
        Command::Cards { limit } => {
            let list = fetch_products_data(source, None)
                .await
                .context("failed to fetch products")?
                .into_list()
                .context("expected a product listing")?;
            let shown = list.first(limit.unwrap_or(list.products.len()));
            let cards = config.formatter()?.cards(shown)?;
            print_json(&cards)
        }
        Command::Carts => {
            let entries = fetch_carts_data(source)
                .await
                .context("failed to fetch carts")?;
            print_json(&CartSummary {
                entries: entries.len(),
                distinct_products: distinct_products(&entries),
                total_quantity: total_quantity(&entries),
            })
        }
        Command::Rupiah { amount } => {
            println!("{}", config.formatter()?.format(*amount)?);
            Ok(())
        }
        Command::Discount { price, percent } => {
            println!("{}", count_discount(*price, *percent)?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
