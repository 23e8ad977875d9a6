//! CLI command implementations.

pub mod browse;
pub mod incoming;
pub mod info;
pub mod lookup;
pub mod stock;

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
