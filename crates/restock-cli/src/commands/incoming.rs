//! Incoming command - every scheduled delivery for one size.

use colored::Colorize;
use restock::Catalog;

use super::print_json;

pub async fn run(
    catalog: &Catalog,
    reference: &str,
    color: &str,
    size: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = catalog.replenishment_schedule(reference, color, size).await?;

    if json {
        return print_json(&schedule);
    }

    if schedule.is_empty() {
        println!("{}", "Nothing scheduled".yellow());
        return Ok(());
    }

    println!("{:12} {:>8}", "Date".yellow().bold(), "Qty".yellow().bold());
    for delivery in &schedule {
        println!("{:12} {:>8}", delivery.date, delivery.quantity);
    }
    let total = schedule
        .iter()
        .fold(0u64, |total, d| total.saturating_add(d.quantity));
    println!("{:12} {:>8}", "Total".bold(), total.to_string().white().bold());
    Ok(())
}
