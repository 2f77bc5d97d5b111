use itertools::Itertools;
use log::debug;

use aqi_core::error::{Error, Result};
use aqi_core::file_handling;
use aqi_core::station_definitions::Config;

use super::{confirmed_indexes, keep_selected, NOTHING_SELECTED};
use crate::output;
use crate::station_selection::prompt_for_selection;

/// Removes the saved stations at `indexes` of [`Config::station_names`].
pub fn remove_selected(config: &mut Config, indexes: &[usize]) -> Vec<String> {
    let chosen = keep_selected(config.station_names(), indexes);
    config.remove_stations(&chosen)
}

pub fn run(config_path: &str) -> Result<()> {
    let mut config = file_handling::load_config(config_path)?;

    if !config.has_stations() {
        return Err(Error::NoStationsSaved);
    }

    // Unlike `add`, a single entry still gets the menu.
    let names = config.station_names();
    let choice = prompt_for_selection(&names, "Select stations to remove")?;
    let Some(indexes) = confirmed_indexes(choice) else {
        output::warn(NOTHING_SELECTED);
        return Ok(());
    };

    let removed = remove_selected(&mut config, &indexes);
    debug!("Removing {}", removed.iter().join(", "));
    file_handling::write_config(config_path, &config)?;

    for name in removed {
        output::success(&format!("Removed {name}"));
    }

    Ok(())
}
