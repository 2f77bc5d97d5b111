use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::aqi::Weather;
use crate::config::token_from_env;
use crate::error::{Error, Result};

/// A station the user chose to keep, with the search that found it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub station_name: String,
    pub uid: i64,
    pub search_query: String,
}

impl Display for StationRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} (uid {}, from `{}`)",
            self.station_name, self.uid, self.search_query
        )
    }
}

/// Contents of the config file: the API key and the station registry.
///
/// Registry keys are display names and are compared case-sensitively.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default)]
    pub stations: IndexMap<String, StationRecord>,
}

impl Config {
    pub fn update_api_key(&mut self, new_key: &str) {
        self.api_key = Some(new_key.trim().to_string());
    }

    /// Returns the stored API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when no key or an empty key is stored.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::MissingApiKey),
        }
    }

    /// Returns the key to use for provider calls, preferring the environment override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when neither source has a key.
    pub fn resolve_api_key(&self, env_override: Option<String>) -> Result<String> {
        if let Some(token) = token_from_env(env_override) {
            debug!("Using API key from the environment");
            return Ok(token);
        }

        self.require_api_key().map(ToString::to_string)
    }

    /// Saves the selected search results under `search_query`.
    ///
    /// Names are trimmed once here; an existing entry with the same name is replaced.
    /// Stations with a blank name are skipped. Returns the names that were written.
    pub fn add_stations(&mut self, selected: &[Weather], search_query: &str) -> Vec<String> {
        let mut added = Vec::with_capacity(selected.len());

        for weather in selected {
            let name = weather.station.name.trim().to_string();
            if name.is_empty() {
                warn!("Skipping station {} without a name", weather.uid);
                continue;
            }

            let record = StationRecord {
                station_name: name.clone(),
                uid: weather.uid,
                search_query: search_query.to_string(),
            };

            if let Some(previous) = self.stations.insert(name.clone(), record) {
                debug!("Replacing saved station {previous}");
            }
            added.push(name);
        }

        added
    }

    /// Removes stations by display name, returning those that were present.
    pub fn remove_stations(&mut self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|name| self.stations.shift_remove(name.as_str()).is_some())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn station_names(&self) -> Vec<String> {
        self.stations.keys().cloned().collect()
    }

    #[must_use]
    pub fn has_stations(&self) -> bool {
        !self.stations.is_empty()
    }
}
