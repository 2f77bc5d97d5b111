//! Integration tests for aqi-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use aqi_core::{
    aqi::{Response, Severity, Station, StationProvider, Weather},
    error::{Error, Result},
    file_handling::{load_config, load_config_or_default, write_config},
    filtering::{build_filtered_result, group_by_query},
    report::build_report,
};
use std::cell::Cell;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

struct CannedProvider {
    calls: Cell<usize>,
}

impl StationProvider for CannedProvider {
    fn fetch(&self, query: &str) -> Result<Response> {
        self.calls.set(self.calls.get() + 1);

        let data = match query {
            "kathmandu" => vec![
                weather(10495, "Bhaisipati, KTM, Nepal", "153"),
                weather(9468, "US Embassy, Kathmandu, Nepal", "-"),
                weather(12345, "Ratnapark, Kathmandu, Nepal", "98"),
            ],
            "beijing" => vec![weather(1451, "Beijing US Embassy", "312")],
            _ => vec![],
        };

        Ok(Response { data })
    }
}

fn weather(uid: i64, name: &str, aqi: &str) -> Weather {
    Weather {
        air_quality: aqi.to_string(),
        uid,
        station: Station {
            name: name.to_string(),
        },
    }
}

/// Test the refresh workflow from a config file to table rows
#[test]
fn test_show_workflow() {
    let yaml_content = r#"
apiKey: abcdef
stations:
  Bhaisipati, KTM, Nepal:
    stationName: Bhaisipati, KTM, Nepal
    uid: 10495
    searchQuery: kathmandu
  US Embassy, Kathmandu, Nepal:
    stationName: US Embassy, Kathmandu, Nepal
    uid: 9468
    searchQuery: kathmandu
  Beijing US Embassy:
    stationName: Beijing US Embassy
    uid: 1451
    searchQuery: beijing
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let config = load_config(&temp_path).unwrap();
    assert_eq!(config.require_api_key().unwrap(), "abcdef");

    let groups = group_by_query(&config);
    assert_eq!(groups.len(), 2);

    let provider = CannedProvider {
        calls: Cell::new(0),
    };
    let readings = build_filtered_result(&groups, &provider).unwrap();
    assert_eq!(provider.calls.get(), 2);

    // Ratnapark was returned but never saved
    let mut uids: Vec<i64> = readings.data.iter().map(|w| w.uid).collect();
    uids.sort_unstable();
    assert_eq!(uids, vec![1451, 9468, 10495]);

    let rows = build_report(&readings, false).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows
        .iter()
        .any(|row| row.location == "Beijing US Embassy" && row.severity == Severity::Hazardous));
    assert!(rows.iter().any(|row| {
        row.location == "Bhaisipati, KTM, Nepal" && row.severity == Severity::Unhealthy
    }));

    let rows_with_unavailable = build_report(&readings, true).unwrap();
    assert_eq!(rows_with_unavailable.len(), 3);
}

/// Test init then add then remove against a fresh config directory
#[test]
fn test_registry_workflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".air").join("aqi.yml");
    let path = path.to_str().unwrap().to_string();

    // init
    let mut config = load_config_or_default(&path).unwrap();
    config.update_api_key("abcdef\n");
    write_config(&path, &config).unwrap();

    // add
    let provider = CannedProvider {
        calls: Cell::new(0),
    };
    let found = provider.fetch("kathmandu").unwrap();
    let mut config = load_config(&path).unwrap();
    let added = config.add_stations(&found.data[..2], "kathmandu");
    assert_eq!(added.len(), 2);
    write_config(&path, &config).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.api_key, Some("abcdef".to_string()));
    assert_eq!(config.stations.len(), 2);
    assert_eq!(config.stations["Bhaisipati, KTM, Nepal"].uid, 10495);

    // remove
    let mut config = config;
    let removed = config.remove_stations(&["US Embassy, Kathmandu, Nepal".to_string()]);
    assert_eq!(removed.len(), 1);
    write_config(&path, &config).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.station_names(), vec!["Bhaisipati, KTM, Nepal"]);
}

/// Test that a config without a key blocks provider access
#[test]
fn test_missing_api_key_workflow() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "stations: {{}}").unwrap();

    let config = load_config(temp_file.path().to_str().unwrap()).unwrap();
    let err = config.require_api_key().unwrap_err();

    assert!(matches!(err, Error::MissingApiKey));
    assert_eq!(
        err.to_string(),
        "No API key found, use `air init` to enter one."
    );
}

/// Test that a malformed reading from the provider is fatal for the report
#[test]
fn test_malformed_reading_workflow() {
    let readings = Response {
        data: vec![weather(1, "Somewhere", "12.7")],
    };

    let result = build_report(&readings, true);
    assert!(matches!(result, Err(Error::MalformedIndex(_))));
}
