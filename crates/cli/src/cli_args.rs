//! Command-line argument parsing.
//!
//! `air` is driven by subcommands; every subcommand accepts the global
//! `--config-path` option.

use clap::{Parser, Subcommand};

/// Command-line arguments for the `air` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use aqi_cli::cli_args::Args;
///
/// let args = Args::parse_from(["air", "show", "--all"]);
/// assert!(args.config_path.is_none());
/// ```
#[derive(Parser, Debug)]
#[command(name = "air", version, about = "Air quality readings for your saved stations")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the station registry YAML.
    ///
    /// If not provided, defaults to `~/.air/aqi.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Store the API token used for every request
    Init {
        /// Token to store instead of prompting for it
        #[arg(long, short = 't')]
        token: Option<String>,
    },

    /// Search stations by keyword and print their readings
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Include stations without a current reading
        #[arg(long, short = 'a', action)]
        all: bool,

        /// Pick which results to show from an interactive menu
        #[arg(long, short = 'f', action)]
        fuzzy: bool,
    },

    /// Search stations by keyword and save the chosen ones
    Add {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Remove saved stations
    Remove,

    /// Print readings for every saved station
    Show {
        /// Include stations without a current reading
        #[arg(long, short = 'a', action)]
        all: bool,
    },
}

/// Joins the words of a search query as typed on the command line.
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}
