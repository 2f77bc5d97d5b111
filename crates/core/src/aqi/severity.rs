//! Severity tiers for air quality index readings.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Value the provider reports when a station has no current reading.
pub const UNAVAILABLE_PLACEHOLDER: &str = "-";

/// A parsed index reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexReading {
    Value(i64),
    Unavailable,
}

impl FromStr for IndexReading {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value == UNAVAILABLE_PLACEHOLDER {
            return Ok(IndexReading::Unavailable);
        }

        value
            .parse::<i64>()
            .map(IndexReading::Value)
            .map_err(|_| Error::MalformedIndex(value.to_string()))
    }
}

impl Display for IndexReading {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexReading::Value(index) => write!(formatter, "{index}"),
            IndexReading::Unavailable => formatter.write_str(UNAVAILABLE_PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    NoInfo,
}

impl Severity {
    /// Classifies an index into a tier. Boundary values belong to the lower tier.
    #[must_use]
    pub fn classify(index: i64) -> Self {
        match index {
            i64::MIN..=50 => Severity::Good,
            51..=100 => Severity::Moderate,
            101..=150 => Severity::UnhealthySensitive,
            151..=200 => Severity::Unhealthy,
            201..=300 => Severity::VeryUnhealthy,
            _ => Severity::Hazardous,
        }
    }

    #[must_use]
    pub fn from_reading(reading: IndexReading) -> Self {
        match reading {
            IndexReading::Value(index) => Severity::classify(index),
            IndexReading::Unavailable => Severity::NoInfo,
        }
    }

    #[must_use]
    pub fn level(&self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Severity::Unhealthy => "Unhealthy",
            Severity::VeryUnhealthy => "Very Unhealthy",
            Severity::Hazardous => "Hazardous",
            Severity::NoInfo => "-",
        }
    }

    #[must_use]
    pub fn implications(&self) -> &'static str {
        match self {
            Severity::Good => {
                "Air quality is considered satisfactory, and air pollution poses little or no risk"
            }
            Severity::Moderate => {
                "Air quality is acceptable; however, for some pollutants there may be a moderate \
                 health concern for a very small number of people who are unusually sensitive to \
                 air pollution."
            }
            Severity::UnhealthySensitive => {
                "Members of sensitive groups may experience health effects. The general public is \
                 not likely to be affected."
            }
            Severity::Unhealthy => {
                "Everyone may begin to experience health effects; members of sensitive groups may \
                 experience more serious health effects"
            }
            Severity::VeryUnhealthy => {
                "Health warnings of emergency conditions. The entire population is more likely to \
                 be affected."
            }
            Severity::Hazardous => {
                "Health alert: everyone may experience more serious health effects"
            }
            Severity::NoInfo => "-",
        }
    }

    #[must_use]
    pub fn cautionary(&self) -> &'static str {
        match self {
            Severity::Good | Severity::NoInfo => "-",
            Severity::Moderate | Severity::UnhealthySensitive => {
                "Active children and adults, and people with respiratory disease, such as asthma, \
                 should limit prolonged outdoor exertion."
            }
            Severity::Unhealthy => {
                "Active children and adults, and people with respiratory disease, such as asthma, \
                 should avoid prolonged outdoor exertion; everyone else, especially children, \
                 should limit prolonged outdoor exertion"
            }
            Severity::VeryUnhealthy => {
                "Active children and adults, and people with respiratory disease, such as asthma, \
                 should avoid all outdoor exertion; everyone else, especially children, should \
                 limit outdoor exertion."
            }
            Severity::Hazardous => "Everyone should avoid all outdoor exertion",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_belong_to_lower_tier() {
        assert_eq!(Severity::classify(0), Severity::Good);
        assert_eq!(Severity::classify(50), Severity::Good);
        assert_eq!(Severity::classify(51), Severity::Moderate);
        assert_eq!(Severity::classify(100), Severity::Moderate);
        assert_eq!(Severity::classify(101), Severity::UnhealthySensitive);
        assert_eq!(Severity::classify(150), Severity::UnhealthySensitive);
        assert_eq!(Severity::classify(151), Severity::Unhealthy);
        assert_eq!(Severity::classify(200), Severity::Unhealthy);
        assert_eq!(Severity::classify(201), Severity::VeryUnhealthy);
        assert_eq!(Severity::classify(300), Severity::VeryUnhealthy);
        assert_eq!(Severity::classify(301), Severity::Hazardous);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(Severity::classify(i64::MIN), Severity::Good);
        assert_eq!(Severity::classify(-5), Severity::Good);
        assert_eq!(Severity::classify(999), Severity::Hazardous);
        assert_eq!(Severity::classify(i64::MAX), Severity::Hazardous);
    }

    #[test]
    fn test_parse_reading() {
        assert_eq!("42".parse::<IndexReading>().unwrap(), IndexReading::Value(42));
        assert_eq!(" 7 ".parse::<IndexReading>().unwrap(), IndexReading::Value(7));
        assert_eq!("-".parse::<IndexReading>().unwrap(), IndexReading::Unavailable);
    }

    #[test]
    fn test_parse_malformed_reading() {
        let result = "12.5".parse::<IndexReading>();
        assert!(matches!(result, Err(Error::MalformedIndex(value)) if value == "12.5"));

        let result = "".parse::<IndexReading>();
        assert!(matches!(result, Err(Error::MalformedIndex(_))));
    }

    #[test]
    fn test_unavailable_reading_maps_to_no_info() {
        assert_eq!(
            Severity::from_reading(IndexReading::Unavailable),
            Severity::NoInfo
        );
        assert_eq!(Severity::NoInfo.level(), "-");
        assert_eq!(Severity::NoInfo.implications(), "-");
    }

    #[test]
    fn test_reading_display() {
        assert_eq!(IndexReading::Value(153).to_string(), "153");
        assert_eq!(IndexReading::Unavailable.to_string(), "-");
    }

    #[test]
    fn test_severity_display_uses_level() {
        assert_eq!(
            Severity::UnhealthySensitive.to_string(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(Severity::Good.cautionary(), "-");
    }
}
