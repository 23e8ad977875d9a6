//! Info command - what was loaded from each export.

use colored::Colorize;
use restock::{Catalog, LayoutKind, SourceMetadata};

use super::print_json;

pub async fn run(catalog: &Catalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (stock, replenishment) = tokio::try_join!(
        catalog.stock_metadata(),
        catalog.replenishment_metadata()
    )?;

    if json {
        return print_json(&[stock, replenishment]);
    }

    print_metadata("Stock", &stock);
    println!();
    print_metadata("Replenishment", &replenishment);
    Ok(())
}

fn print_metadata(title: &str, meta: &SourceMetadata) {
    let layout = match meta.layout {
        LayoutKind::ByHeader => "header".green(),
        LayoutKind::Positional => "positional (no usable header)".yellow(),
    };

    println!("{}", title.cyan().bold());
    println!("  Resource: {}", meta.resource.white());
    println!("  Format:   {}", meta.format);
    println!("  Columns:  {}", layout);
    println!("  Records:  {}", meta.record_count.to_string().white().bold());
    println!("  Size:     {} bytes", meta.size_bytes);
    println!("  Hash:     {}", meta.hash);
    println!("  Loaded:   {}", meta.loaded_at.to_rfc3339());
}
