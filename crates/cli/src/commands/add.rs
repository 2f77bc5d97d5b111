use aqi_core::aqi::{Response, StationProvider};
use aqi_core::error::Result;
use aqi_core::file_handling;
use aqi_core::station_definitions::Config;

use super::search::result_labels;
use super::{confirmed_indexes, fetch_results, keep_selected, NOTHING_SELECTED};
use crate::output;
use crate::station_selection::select_options;

/// Saves the results at `indexes` under `query`, returning the names written.
pub fn add_selected(
    config: &mut Config,
    response: Response,
    indexes: &[usize],
    query: &str,
) -> Vec<String> {
    let chosen = keep_selected(response.data, indexes);
    config.add_stations(&chosen, query)
}

pub fn run<P>(config_path: &str, mut config: Config, provider: &P, query: &str) -> Result<()>
where
    P: StationProvider + ?Sized,
{
    let response = fetch_results(provider, query)?;
    let labels = result_labels(&response);

    let choice = select_options(&labels, "Select stations to add")?;
    let Some(indexes) = confirmed_indexes(choice) else {
        output::warn(NOTHING_SELECTED);
        return Ok(());
    };

    let added = add_selected(&mut config, response, &indexes, query);
    file_handling::write_config(config_path, &config)?;

    for name in added {
        output::success(&format!("Added {name}"));
    }

    Ok(())
}
