//! Command-line configuration

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand};

/// Atelier command-line configuration
#[derive(Debug, Parser)]
#[command(name = "atelier", about = "Atelier Arôme compendium and collection vial", long_about = None)]
pub struct Config {
    /// Compendium YAML file (defaults to the bundled compendium)
    #[arg(long, env = "ATELIER_CATALOGUE")]
    pub catalogue: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    pub fn load() -> Self {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::parse()
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the compendium
    Compendium {
        /// Only show featured essences
        #[arg(long)]
        featured: bool,
    },

    /// Replay a shopping session and show the vial
    Vial(VialArgs),
}

/// Arguments for replaying a session
#[derive(Debug, Args)]
pub struct VialArgs {
    /// Product to add, as `ID` or `ID:QUANTITY` (repeatable)
    #[arg(short, long = "add")]
    pub add: Vec<LineArg>,

    /// Product line to remove after adding (repeatable)
    #[arg(short, long = "remove")]
    pub remove: Vec<String>,

    /// Complete checkout at the end of the session
    #[arg(long)]
    pub checkout: bool,
}

/// A product id with an optional quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineArg {
    /// Product identifier
    pub product_id: String,

    /// Units to add
    pub quantity: u32,
}

impl FromStr for LineArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product_id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => {
                let quantity = quantity
                    .parse::<u32>()
                    .map_err(|err| format!("invalid quantity in {s:?}: {err}"))?;

                (id, quantity)
            }
            None => (s, 1),
        };

        if product_id.is_empty() {
            return Err(format!("missing product id in {s:?}"));
        }

        Ok(Self {
            product_id: product_id.to_string(),
            quantity,
        })
    }
}
