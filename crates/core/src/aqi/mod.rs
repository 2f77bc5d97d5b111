//! Access to the World Air Quality Index search API.
//!
//! - [`client`]: the [`StationProvider`] seam and its HTTP implementation
//! - [`response`]: wire types of a keyword search
//! - [`severity`]: index parsing and severity tiers

pub mod client;
pub mod response;
pub mod severity;

pub use client::{StationProvider, WaqiClient};
pub use response::{Response, Station, Weather};
pub use severity::{IndexReading, Severity};
