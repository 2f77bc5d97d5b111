//! Air Quality Core Library
//!
//! This crate provides the core functionality for `air`, a terminal tool that
//! searches the World Air Quality Index, saves chosen monitoring stations and
//! later shows their current readings.
//!
//! # Key Features
//!
//! - **Provider Access**: Keyword search against the WAQI API behind
//!   [`aqi::StationProvider`]
//! - **Station Registry**: YAML config holding the API key and saved stations
//! - **Grouped Refresh**: One search per distinct saved query, filtered to saved stations
//! - **Severity Tiers**: Classification of index readings for display
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Refreshing the saved stations:
//!
//! ```no_run
//! use aqi_core::aqi::WaqiClient;
//! use aqi_core::file_handling::load_config;
//! use aqi_core::filtering::{build_filtered_result, group_by_query};
//!
//! let config = load_config("/home/me/.air/aqi.yml")?;
//! let client = WaqiClient::new(config.require_api_key()?);
//! let readings = build_filtered_result(&group_by_query(&config), &client)?;
//! for weather in &readings.data {
//!     println!("{weather}");
//! }
//! # Ok::<(), aqi_core::error::Error>(())
//! ```

pub mod aqi;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod filtering;
pub mod report;
pub mod station_definitions;
