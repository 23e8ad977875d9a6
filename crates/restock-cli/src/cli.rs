//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Restock: stock and replenishment lookups
#[derive(Parser)]
#[command(name = "restock")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the exports
    #[arg(short, long, global = true, default_value = ".", conflicts_with = "url")]
    pub dir: PathBuf,

    /// Base URL serving the exports (instead of --dir)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Stock export name (overrides config)
    #[arg(long, global = true)]
    pub stock: Option<String>,

    /// Replenishment export name (overrides config)
    #[arg(long, global = true)]
    pub replenishment: Option<String>,

    /// Field delimiter
    #[arg(long, global = true, default_value = "auto")]
    pub delimiter: DelimiterChoice,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every base reference
    Refs,

    /// List the colors of a reference
    Colors {
        /// Product reference (variant suffixes are ignored)
        #[arg(value_name = "REF")]
        reference: String,
    },

    /// List the sizes of a reference and color
    Sizes {
        #[arg(value_name = "REF")]
        reference: String,
        color: String,
    },

    /// Show on-hand stock for one size
    Stock {
        #[arg(value_name = "REF")]
        reference: String,
        color: String,
        size: String,
    },

    /// Show every scheduled delivery for one size
    Incoming {
        #[arg(value_name = "REF")]
        reference: String,
        color: String,
        size: String,
    },

    /// Show stock and replenishment for every size of a reference and color
    Lookup {
        #[arg(value_name = "REF")]
        reference: String,
        color: String,
    },

    /// Show what was loaded from each export
    Info,
}

/// Delimiter choice for both exports
#[derive(Clone, Debug, Default)]
pub enum DelimiterChoice {
    /// Detect per document
    #[default]
    Auto,
    Semicolon,
    Comma,
}

impl DelimiterChoice {
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            DelimiterChoice::Auto => None,
            DelimiterChoice::Semicolon => Some(b';'),
            DelimiterChoice::Comma => Some(b','),
        }
    }
}

impl std::str::FromStr for DelimiterChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DelimiterChoice::Auto),
            "semicolon" | ";" => Ok(DelimiterChoice::Semicolon),
            "comma" | "," => Ok(DelimiterChoice::Comma),
            _ => Err(format!(
                "Unknown delimiter: {}. Use auto, semicolon, or comma.",
                s
            )),
        }
    }
}

impl std::fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterChoice::Auto => write!(f, "auto"),
            DelimiterChoice::Semicolon => write!(f, "semicolon"),
            DelimiterChoice::Comma => write!(f, "comma"),
        }
    }
}
