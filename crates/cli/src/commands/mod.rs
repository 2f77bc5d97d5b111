//! Subcommand implementations.
//!
//! Each subcommand lives in its own module. Functions that talk to the
//! provider are generic over [`StationProvider`] so they can be driven by a
//! mock in tests.

use std::env;

use log::debug;

use aqi_core::aqi::{Response, StationProvider, WaqiClient};
use aqi_core::config::{self, TOKEN_ENV_VAR};
use aqi_core::error::{Error, Result};
use aqi_core::file_handling;
use aqi_core::station_definitions::Config;

use crate::cli_args::{join_query, Args, Commands};
use crate::station_selection::SelectionChoice;

pub mod add;
pub mod init;
pub mod remove;
pub mod search;
pub mod show;

pub(crate) const NOTHING_SELECTED: &str = "No stations selected.";

/// Runs the parsed subcommand.
pub fn run(args: &Args) -> Result<()> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    match &args.command {
        Commands::Init { token } => init::run(&config_path, token.clone()),
        Commands::Search { query, all, fuzzy } => {
            let config = file_handling::load_config_or_default(&config_path)?;
            let client = build_client(&config)?;
            search::run(&client, &join_query(query), *all, *fuzzy)
        }
        Commands::Add { query } => {
            let config = file_handling::load_config(&config_path)?;
            let client = build_client(&config)?;
            add::run(&config_path, config, &client, &join_query(query))
        }
        Commands::Remove => remove::run(&config_path),
        Commands::Show { all } => {
            let config = file_handling::load_config(&config_path)?;
            let client = build_client(&config)?;
            show::run(&config, &client, *all)
        }
    }
}

fn build_client(config: &Config) -> Result<WaqiClient> {
    let token = config.resolve_api_key(env::var(TOKEN_ENV_VAR).ok())?;
    Ok(WaqiClient::new(token))
}

/// Fetches `query`, treating an empty result as [`Error::NoResults`].
pub fn fetch_results<P>(provider: &P, query: &str) -> Result<Response>
where
    P: StationProvider + ?Sized,
{
    let response = provider.fetch(query)?;
    debug!("`{query}` returned {} stations", response.data.len());

    if response.is_empty() {
        return Err(Error::no_results(query));
    }

    Ok(response)
}

/// Indexes the user confirmed, or `None` when they quit or picked nothing.
pub(crate) fn confirmed_indexes(choice: SelectionChoice) -> Option<Vec<usize>> {
    match choice {
        SelectionChoice::Selected(indexes) if !indexes.is_empty() => Some(indexes),
        _ => None,
    }
}

/// Keeps the items at `indexes`, in their original order.
pub fn keep_selected<T>(items: Vec<T>, indexes: &[usize]) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(index, _)| indexes.contains(index))
        .map(|(_, item)| item)
        .collect()
}
