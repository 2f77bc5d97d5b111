use aqi_core::aqi::StationProvider;
use aqi_core::error::Result;
use aqi_core::filtering::{build_filtered_result, group_by_query};
use aqi_core::report::{build_report, ReportRow};
use aqi_core::station_definitions::Config;

use crate::{output, table};

/// Current readings for every saved station.
///
/// Runs one provider request per distinct search query and stops at the first
/// failing request.
pub fn saved_station_rows<P>(
    config: &Config,
    provider: &P,
    include_unavailable: bool,
) -> Result<Vec<ReportRow>>
where
    P: StationProvider + ?Sized,
{
    let groups = group_by_query(config);
    let response = build_filtered_result(&groups, provider)?;
    build_report(&response, include_unavailable)
}

pub fn run<P>(config: &Config, provider: &P, include_unavailable: bool) -> Result<()>
where
    P: StationProvider + ?Sized,
{
    if !config.has_stations() {
        output::warn("No stations saved yet, use `air add <query>` to add some.");
        return Ok(());
    }

    let rows = saved_station_rows(config, provider, include_unavailable)?;
    if rows.is_empty() {
        output::warn("No current readings, use --all to list every station.");
        return Ok(());
    }

    table::print_table(&rows)
}
