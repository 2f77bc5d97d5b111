//! Reading and writing the air-quality config file.
//!
//! The file holds the API key and the station registry. Only `init`, `add`
//! and `remove` write it, always as a full overwrite.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::station_definitions::Config;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn parse_config(config_path: &str, mut reader: File) -> Result<Config> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    if contents.trim().is_empty() {
        debug!("Config file `{config_path}` is empty");
        return Ok(Config::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })
}

/// Loads the config file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`Error::NotInitialized`])
/// - The file exists but cannot be read
/// - The file contains invalid YAML or doesn't match the expected structure
///
/// # Examples
///
/// ```no_run
/// use aqi_core::file_handling::load_config;
///
/// let config = load_config("/home/me/.air/aqi.yml")?;
/// println!("{} saved station(s)", config.stations.len());
/// # Ok::<(), aqi_core::error::Error>(())
/// ```
pub fn load_config(config_path: &str) -> Result<Config> {
    if !Path::new(config_path).exists() {
        return Err(Error::not_initialized(config_path.to_string()));
    }

    let reader = get_reader("config", config_path)?;
    let config = parse_config(config_path, reader)?;
    debug!(
        "Loaded {} saved station(s) from `{config_path}`",
        config.stations.len()
    );

    Ok(config)
}

/// Loads the config file, or an empty config when the file does not exist yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default(config_path: &str) -> Result<Config> {
    match load_config(config_path) {
        Err(Error::NotInitialized { .. }) => {
            info!("No config at `{config_path}`, starting from an empty one");
            Ok(Config::default())
        }
        other => other,
    }
}

/// Writes the config file, creating its directory first when needed.
///
/// # Errors
///
/// Returns an error if:
/// - The directory or file cannot be created or written to
/// - Serialization to YAML fails
pub fn write_config(config_path: &str, config: &Config) -> Result<()> {
    if let Some(parent) = Path::new(config_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating config directory `{}`", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error(
                    "config directory".to_string(),
                    parent.display().to_string(),
                    e,
                )
            })?;
        }
    }

    let f = File::create(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    serde_yaml::to_writer(f, config).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })
}
