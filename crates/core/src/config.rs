//! Configuration path utilities for air-quality.
//!
//! This module resolves the location of the station registry file and the
//! provider endpoint, expanding shell variables like `~` in paths.

/// Default path for the station registry and API key
const DEFAULT_CONFIG_PATH: &str = "~/.air/aqi.yml";

/// Search endpoint of the World Air Quality Index provider
pub const DEFAULT_API_URL: &str = "https://api.waqi.info/search/";

/// Environment variable that overrides the API key stored in the config file
pub const TOKEN_ENV_VAR: &str = "AQITOKEN";

/// Where users can request an API token
pub const TOKEN_HELP_URL: &str = "https://aqicn.org/data-platform/token/#/";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use aqi_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/aqi.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/aqi.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Picks the API key from the environment override when it holds a value.
pub fn token_from_env(env_value: Option<String>) -> Option<String> {
    env_value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/aqi.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/aqi.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        assert!(result.ends_with(".air/aqi.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-aqi.yml".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-aqi.yml"));
    }

    #[test]
    fn test_token_from_env() {
        assert_eq!(
            token_from_env(Some(" secret ".to_string())),
            Some("secret".to_string())
        );
        assert_eq!(token_from_env(Some("   ".to_string())), None);
        assert_eq!(token_from_env(None), None);
    }
}
