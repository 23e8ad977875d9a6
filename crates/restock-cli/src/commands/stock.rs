//! Stock command - on-hand quantity for one size.

use colored::Colorize;
use restock::Catalog;
use serde::Serialize;

use super::print_json;

#[derive(Serialize)]
struct StockReport<'a> {
    reference: &'a str,
    color: &'a str,
    size: &'a str,
    stock: u64,
}

pub async fn run(
    catalog: &Catalog,
    reference: &str,
    color: &str,
    size: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stock = catalog.stock(reference, color, size).await?;

    if json {
        return print_json(&StockReport {
            reference,
            color,
            size,
            stock,
        });
    }

    let quantity = if stock > 0 {
        stock.to_string().green().bold()
    } else {
        "out of stock".red().bold()
    };
    println!("{} {} {}: {}", reference, color, size, quantity);
    Ok(())
}
