use log::info;

use aqi_core::config::TOKEN_HELP_URL;
use aqi_core::error::{Error, Result};
use aqi_core::file_handling;
use aqi_core::station_definitions::Config;

use crate::output;
use crate::station_selection::prompt_hidden;

/// Stores `token` in the config at `config_path`, keeping any saved stations.
///
/// Creates the config file and its directory when they don't exist yet.
pub fn store_token(config_path: &str, token: &str) -> Result<Config> {
    if token.trim().is_empty() {
        return Err(Error::Misc("The API token cannot be empty.".to_string()));
    }

    let mut config = file_handling::load_config_or_default(config_path)?;
    config.update_api_key(token);
    file_handling::write_config(config_path, &config)?;
    info!("Stored API key in `{config_path}`");

    Ok(config)
}

pub fn run(config_path: &str, token: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => {
            output::info(&format!("Get an API token at {TOKEN_HELP_URL}"));
            match prompt_hidden("Enter your API token")? {
                Some(token) => token,
                None => {
                    output::warn("Cancelled, nothing was saved.");
                    return Ok(());
                }
            }
        }
    };

    store_token(config_path, &token)?;
    output::success(&format!("API token saved to {config_path}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::station_definitions::StationRecord;
    use tempfile::tempdir;

    #[test]
    fn test_store_token_creates_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("aqi.yml");
        let path = path.to_str().unwrap();

        let config = store_token(path, "  secret \n").unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(file_handling::load_config(path).unwrap(), config);
    }

    #[test]
    fn test_store_token_keeps_stations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aqi.yml");
        let path = path.to_str().unwrap();

        let mut existing = Config::default();
        existing.update_api_key("old");
        existing.stations.insert(
            "Bhaisipati, KTM, Nepal".to_string(),
            StationRecord {
                station_name: "Bhaisipati, KTM, Nepal".to_string(),
                uid: 10495,
                search_query: "kathmandu".to_string(),
            },
        );
        file_handling::write_config(path, &existing).unwrap();

        let config = store_token(path, "new").unwrap();

        assert_eq!(config.api_key.as_deref(), Some("new"));
        assert_eq!(config.stations, existing.stations);
    }

    #[test]
    fn test_store_token_rejects_blank() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aqi.yml");

        let result = store_token(path.to_str().unwrap(), "   ");

        assert!(matches!(result, Err(Error::Misc(_))));
        assert!(!path.exists());
    }
}
