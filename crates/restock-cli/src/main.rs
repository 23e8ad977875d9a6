//! Restock CLI - stock and replenishment lookups.

mod cli;
mod commands;
mod logging;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use restock::{Catalog, CatalogConfig, DocumentSource, FileSource, HttpSource};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = build_catalog(&cli)?;
    let json = cli.json;

    match cli.command {
        Commands::Refs => commands::browse::refs(&catalog, json).await,
        Commands::Colors { reference } => commands::browse::colors(&catalog, &reference, json).await,
        Commands::Sizes { reference, color } => {
            commands::browse::sizes(&catalog, &reference, &color, json).await
        }
        Commands::Stock {
            reference,
            color,
            size,
        } => commands::stock::run(&catalog, &reference, &color, &size, json).await,
        Commands::Incoming {
            reference,
            color,
            size,
        } => commands::incoming::run(&catalog, &reference, &color, &size, json).await,
        Commands::Lookup { reference, color } => {
            commands::lookup::run(&catalog, &reference, &color, json).await
        }
        Commands::Info => commands::info::run(&catalog, json).await,
    }
}

fn build_catalog(cli: &Cli) -> Result<Catalog, Box<dyn std::error::Error>> {
    let mut config = match cli.config {
        Some(ref path) => CatalogConfig::from_json_file(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(ref stock) = cli.stock {
        config = config.with_stock_resource(stock);
    }
    if let Some(ref replenishment) = cli.replenishment {
        config = config.with_replenishment_resource(replenishment);
    }
    if let Some(d) = cli.delimiter.as_byte() {
        config = config.with_delimiter(d);
    }

    let source: Arc<dyn DocumentSource> = match cli.url {
        Some(ref url) => Arc::new(HttpSource::new(url)?),
        None => Arc::new(FileSource::new(&cli.dir)),
    };

    Ok(Catalog::with_config(source, config)?)
}
