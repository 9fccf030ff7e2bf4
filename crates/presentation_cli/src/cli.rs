//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::{Temperature, TemperatureScale};

/// wttr-lookup CLI
#[derive(Debug, Parser)]
#[command(name = "wttr-lookup")]
#[command(author, version, about = "Look up the weather for a location on wttr.in", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true, env = "WTTR_LOOKUP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search one or more locations and print the weather
    ///
    /// Example: wttr-lookup lookup Melbourne Seattle
    Lookup {
        /// Locations, searched in order
        #[arg(required = true)]
        locations: Vec<String>,

        /// Print each view model as a JSON line instead of the panels
        #[arg(long)]
        json: bool,
    },

    /// Read searches and commands from stdin
    ///
    /// A plain line is a search. Type :help for the commands.
    Interactive,

    /// Convert a temperature between Celsius and Fahrenheit
    ///
    /// Example: wttr-lookup convert 212 --to c
    Convert {
        /// Temperature on the opposite scale of --to
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Target scale: c or f
        #[arg(short, long)]
        to: TemperatureScale,
    },
}

/// Log filter for a `-v` count, or `None` to use the configured filter
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Convert `value` to `target`, reading it on the other scale
#[must_use]
pub fn convert(value: f64, target: TemperatureScale) -> Temperature {
    Temperature::new(value, target.opposite()).convert_to(target)
}
