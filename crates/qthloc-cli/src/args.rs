use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for qthloc
#[derive(Debug, Parser)]
#[command(
    name = "qthloc",
    version,
    about = "Locate amateur-radio stations from their Maidenhead locator"
)]
pub struct CliArgs {
    /// City table (CSV with city,country,lat,lng[,iso2,admin_name,population]; .gz allowed).
    /// Without it a small built-in reference set is used.
    #[arg(short = 'c', long = "cities", env = "QTHLOC_CITIES", global = true)]
    pub cities: Option<PathBuf>,

    /// Optional comma-separated list of ISO2 codes or country names to keep (e.g. DE,AT)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Always parse the city table; never read or write the binary cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a locator into the centre of its cell
    Decode {
        /// 2, 4, 6 or 8 character locator (e.g. JO62qm)
        locator: String,
    },

    /// Encode a coordinate into a locator
    Encode {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Number of character pairs (1-4)
        #[arg(short = 'p', long = "precision", default_value_t = 3,
              value_parser = clap::value_parser!(u8).range(1..=4))]
        precision: u8,
    },

    /// Great-circle distance and heading between two locators
    Distance { from: String, to: String },

    /// Nearest city to a locator
    Nearest {
        locator: String,
        /// Minimum population a city must have
        #[arg(short = 'm', long = "min-pop", default_value_t = 100_000)]
        min_pop: u64,
        /// List every qualifying city within this many km instead
        #[arg(short = 'r', long = "radius")]
        radius_km: Option<f64>,
    },

    /// Full report for a received station
    Query {
        /// Your own locator
        #[arg(long = "my", env = "QTHLOC_MY")]
        my: String,
        /// Locator of the received station
        rx: String,
        /// Population threshold; repeat for several (default 100000 and 1000000)
        #[arg(short = 't', long = "threshold")]
        thresholds: Vec<u64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of the city table
    Stats,

    /// Search for cities containing a substring
    Cities {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },
}
