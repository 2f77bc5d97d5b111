use aqi_core::aqi::{Response, StationProvider};
use aqi_core::error::Result;
use aqi_core::report::{build_report, ReportRow};

use super::{confirmed_indexes, fetch_results, keep_selected, NOTHING_SELECTED};
use crate::station_selection::select_options;
use crate::{output, table};

/// Labels shown in the selection menu, one per search result.
pub fn result_labels(response: &Response) -> Vec<String> {
    response.data.iter().map(ToString::to_string).collect()
}

/// Report rows for `response`, optionally narrowed to the `selected` result indexes.
pub fn report_for(
    mut response: Response,
    selected: Option<&[usize]>,
    include_unavailable: bool,
) -> Result<Vec<ReportRow>> {
    if let Some(indexes) = selected {
        response.data = keep_selected(response.data, indexes);
    }

    build_report(&response, include_unavailable)
}

pub fn run<P>(provider: &P, query: &str, include_unavailable: bool, fuzzy: bool) -> Result<()>
where
    P: StationProvider + ?Sized,
{
    let response = fetch_results(provider, query)?;

    let selected = if fuzzy {
        let labels = result_labels(&response);
        let choice = select_options(&labels, "Select stations to show")?;
        let Some(indexes) = confirmed_indexes(choice) else {
            output::warn(NOTHING_SELECTED);
            return Ok(());
        };
        Some(indexes)
    } else {
        None
    };

    let rows = report_for(response, selected.as_deref(), include_unavailable)?;
    if rows.is_empty() {
        output::warn("No current readings, use --all to list every station.");
        return Ok(());
    }

    table::print_table(&rows)
}
