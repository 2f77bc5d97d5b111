use log::debug;

use crate::aqi::{IndexReading, Response, Severity};
use crate::error::Result;

/// Column titles of the air quality table.
pub const TABLE_HEADERS: [&str; 5] = ["Location", "AQI", "Level", "Implications", "Cautionary"];

/// One table row: a station, its reading and the tier the reading falls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub location: String,
    pub reading: IndexReading,
    pub severity: Severity,
}

impl ReportRow {
    #[must_use]
    pub fn cells(&self) -> [String; 5] {
        [
            self.location.clone(),
            self.reading.to_string(),
            self.severity.level().to_string(),
            self.severity.implications().to_string(),
            self.severity.cautionary().to_string(),
        ]
    }
}

/// Classifies every reading of `response` into a table row.
///
/// Stations without a current reading only get a row when
/// `include_unavailable` is set.
///
/// # Errors
///
/// Returns [`crate::error::Error::MalformedIndex`] when a reading is neither a
/// whole number nor the unavailable placeholder.
pub fn build_report(response: &Response, include_unavailable: bool) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::with_capacity(response.data.len());

    for weather in &response.data {
        let reading = weather.reading()?;

        if reading == IndexReading::Unavailable && !include_unavailable {
            debug!("Skipping `{}`: no reading", weather.station.name);
            continue;
        }

        rows.push(ReportRow {
            location: weather.station.name.clone(),
            reading,
            severity: Severity::from_reading(reading),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::{Station, Weather};
    use crate::error::Error;

    fn response(readings: &[(&str, &str)]) -> Response {
        Response {
            data: readings
                .iter()
                .enumerate()
                .map(|(i, (name, aqi))| Weather {
                    air_quality: (*aqi).to_string(),
                    uid: i as i64,
                    station: Station {
                        name: (*name).to_string(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn test_build_report_classifies_rows() {
        let rows = build_report(
            &response(&[("A", "50"), ("B", "51"), ("C", "300"), ("D", "301")]),
            false,
        )
        .unwrap();

        let severities: Vec<Severity> = rows.iter().map(|row| row.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Good,
                Severity::Moderate,
                Severity::VeryUnhealthy,
                Severity::Hazardous
            ]
        );
    }

    #[test]
    fn test_build_report_omits_unavailable_by_default() {
        let rows = build_report(&response(&[("A", "-"), ("B", "20")]), false).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location, "B");
    }

    #[test]
    fn test_build_report_includes_unavailable_when_asked() {
        let rows = build_report(&response(&[("A", "-"), ("B", "20")]), true).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].severity, Severity::NoInfo);
        assert_eq!(rows[0].cells(), ["A", "-", "-", "-", "-"].map(String::from));
    }

    #[test]
    fn test_build_report_malformed_index() {
        let result = build_report(&response(&[("A", "20"), ("B", "n/a")]), true);
        assert!(matches!(result, Err(Error::MalformedIndex(value)) if value == "n/a"));
    }

    #[test]
    fn test_row_cells_follow_headers() {
        let rows = build_report(&response(&[("Kathmandu", "153")]), false).unwrap();
        let cells = rows[0].cells();

        assert_eq!(cells.len(), TABLE_HEADERS.len());
        assert_eq!(cells[0], "Kathmandu");
        assert_eq!(cells[1], "153");
        assert_eq!(cells[2], "Unhealthy");
    }
}
