//! Air CLI Library
//!
//! This crate provides the command-line interface for `air`, a terminal tool
//! that keeps a list of air quality monitoring stations and prints their
//! current readings as a color-coded table.
//!
//! # Architecture
//!
//! - [`cli_args`]: Subcommand parsing with `clap`
//! - [`commands`]: One module per subcommand
//! - [`station_selection`]: Interactive multi-select menu and hidden prompt
//! - [`table`]: Bordered, word-wrapped table rendering
//! - [`colors`] and [`output`]: Terminal colors for severity tiers and messages
//!
//! # Examples
//!
//! ```bash
//! # Store the API token
//! air init
//!
//! # Look up stations without saving them
//! air search kathmandu
//!
//! # Save stations picked from a search
//! air add new delhi
//!
//! # Readings for every saved station, including those without a reading
//! air show --all
//!
//! # Use another registry file
//! air -c ~/work/aqi.yml show
//! ```

pub mod cli_args;
pub mod colors;
pub mod commands;
pub mod output;
pub mod station_selection;
pub mod table;
