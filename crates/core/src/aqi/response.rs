use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::aqi::severity::IndexReading;
use crate::error::{Error, Result};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
}

/// One entry of the `data` array returned by a keyword search.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Weather {
    #[serde(rename = "aqi")]
    pub air_quality: String,
    pub uid: i64,
    pub station: Station,
}

impl Weather {
    pub fn reading(&self) -> Result<IndexReading> {
        self.air_quality.parse()
    }
}

impl Display for Weather {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} (AQI: {})", self.station.name, self.air_quality)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    #[serde(default)]
    pub data: Vec<Weather>,
}

impl Response {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Parses a raw provider body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] when the provider reports `status: "error"`
    /// and [`Error::Fetch`] when the body is not a search response.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(body)
            .map_err(|e| Error::Fetch(format!("Couldn't decode provider response: {e}")))?;
        Self::try_from(envelope)
    }
}

/// Wire shape of a provider reply. On failure `data` holds a message instead of records.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

impl TryFrom<Envelope> for Response {
    type Error = Error;

    fn try_from(envelope: Envelope) -> Result<Self> {
        if envelope.status.as_deref() == Some("error") {
            let message = match envelope.data {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            };
            return Err(Error::Provider(message));
        }

        if envelope.data.is_null() {
            return Ok(Response::default());
        }

        let data: Vec<Weather> = serde_json::from_value(envelope.data)
            .map_err(|e| Error::Fetch(format!("Couldn't decode provider response: {e}")))?;

        Ok(Response { data })
    }
}
