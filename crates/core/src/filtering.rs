//! Re-fetching saved stations.
//!
//! Saved stations are grouped by the search that found them so each distinct
//! search runs once, then each response is narrowed to the saved identifiers.

use indexmap::IndexMap;
use log::{debug, info};

use crate::aqi::{Response, StationProvider};
use crate::error::Result;
use crate::station_definitions::Config;

/// Search query mapped to the identifiers saved from it.
pub type QueryGroups = IndexMap<String, Vec<i64>>;

/// Groups saved station identifiers by their original search query.
///
/// Identifiers saved under different queries stay in separate groups even if
/// those searches would return the same station.
#[must_use]
pub fn group_by_query(config: &Config) -> QueryGroups {
    let mut groups = QueryGroups::new();

    for record in config.stations.values() {
        groups
            .entry(record.search_query.clone())
            .or_default()
            .push(record.uid);
    }

    groups
}

/// Runs one provider search per group and keeps only the saved stations.
///
/// Searches run one after another in group order. The first failing search
/// aborts the whole call and its error is returned as is: no partial result
/// and no retry. Saved identifiers the provider no longer returns are left out
/// without an error. Kept records follow group order, then provider order.
///
/// # Errors
///
/// Returns the first error reported by `provider`.
pub fn build_filtered_result<P>(groups: &QueryGroups, provider: &P) -> Result<Response>
where
    P: StationProvider + ?Sized,
{
    let mut filtered = Response::default();

    for (query, uids) in groups {
        let response = provider.fetch(query)?;
        let before = filtered.data.len();

        filtered.data.extend(
            response
                .data
                .into_iter()
                .filter(|weather| uids.contains(&weather.uid)),
        );

        let kept = filtered.data.len() - before;
        if kept < uids.len() {
            info!(
                "`{query}`: {} of {} saved station(s) were not returned",
                uids.len() - kept,
                uids.len()
            );
        }
        debug!("`{query}`: kept {kept} station(s)");
    }

    Ok(filtered)
}
