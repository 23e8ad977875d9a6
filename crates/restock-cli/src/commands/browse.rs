//! Browse commands - list references, colors and sizes.

use colored::Colorize;
use restock::Catalog;

use super::print_json;

pub async fn refs(catalog: &Catalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let refs = catalog.unique_refs().await?;
    if json {
        return print_json(&refs);
    }

    println!("{} {}", refs.len().to_string().white().bold(), "references".cyan());
    for reference in &refs {
        println!("  {}", reference);
    }
    Ok(())
}

pub async fn colors(
    catalog: &Catalog,
    reference: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let colors = catalog.colors_for(reference).await?;
    if json {
        return print_json(&colors);
    }

    if colors.is_empty() {
        println!("{} {}", "No colors for".yellow(), reference.white().bold());
        return Ok(());
    }
    println!("{} {}", "Colors for".cyan().bold(), reference.white().bold());
    for color in &colors {
        println!("  {}", color);
    }
    Ok(())
}

pub async fn sizes(
    catalog: &Catalog,
    reference: &str,
    color: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sizes = catalog.sizes_for(reference, color).await?;
    if json {
        return print_json(&sizes);
    }

    if sizes.is_empty() {
        println!(
            "{} {} / {}",
            "No sizes for".yellow(),
            reference.white().bold(),
            color.white()
        );
        return Ok(());
    }
    println!("{}", sizes.join("  "));
    Ok(())
}
