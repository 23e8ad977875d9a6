//! Lookup command - stock and replenishment for every size of a reference/color.

use colored::Colorize;
use restock::{Catalog, SizeAvailability};

use super::print_json;

pub async fn run(
    catalog: &Catalog,
    reference: &str,
    color: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = catalog.size_grid(reference, color).await?;

    if json {
        return print_json(&grid);
    }

    if grid.is_empty() {
        println!(
            "{} {} / {}",
            "Nothing stocked for".yellow(),
            reference.white().bold(),
            color.white()
        );
        return Ok(());
    }

    println!(
        "{:6} {:>14} {:>12} {:>10}",
        "Size".yellow().bold(),
        "Stock".yellow().bold(),
        "Incoming".yellow().bold(),
        "Qty".yellow().bold()
    );
    for row in &grid {
        println!("{}", format_row(row));
    }
    Ok(())
}

fn format_row(row: &SizeAvailability) -> String {
    let stock = if row.in_stock() {
        format!("{:>14}", row.stock).green()
    } else {
        format!("{:>14}", "out of stock").red()
    };
    let (date, quantity) = match row.replenishment {
        Some(ref r) => (r.date.clone(), r.quantity.to_string()),
        None => ("-".to_string(), "-".to_string()),
    };
    format!("{:6} {} {:>12} {:>10}", row.size, stock, date, quantity)
}
