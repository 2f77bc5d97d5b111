use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Couldn't read config file at `{}`. Use `air init` to get started.", .path)]
    NotInitialized { path: String },

    #[error("No API key found, use `air init` to enter one.")]
    MissingApiKey,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("{}", .0)]
    Fetch(String),

    #[error("Error from air quality provider: {}", .0)]
    Provider(String),

    #[error("No data found for search query: {}", .query)]
    NoResults { query: String },

    #[error("There are no stations in your config file. Use `air add <city/country>` to add new stations.")]
    NoStationsSaved,

    #[error("Malformed air quality index: `{}`", .0)]
    MalformedIndex(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn not_initialized(path: String) -> Self {
        Self::NotInitialized { path }
    }

    pub fn no_results(query: &str) -> Self {
        Self::NoResults {
            query: query.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Errors that stop a command but are reported as a warning with a clean exit.
    #[must_use]
    pub fn is_non_fatal(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }
}

impl From<ureq::Error> for Error {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::Status(code, response) => {
                let status_text = response.status_text().to_string();
                error!("Provider responded with HTTP {code}");
                Self::Fetch(format!("Request failed with status {code}: {status_text}"))
            }
            ureq::Error::Transport(transport) => {
                error!("Transport error: {transport}");
                Self::Fetch(format!("No connection: {transport}"))
            }
        }
    }
}
