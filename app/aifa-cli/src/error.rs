use aifa_api::ApiError;
use aifa_auth::AuthError;
use aifa_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Remote service error: {source} {location}")]
    Api {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("No identity available yet, run `aifa status` once the identity service is reachable {location}")]
    NoIdentity { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_identity() -> Self {
        Self::NoIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Line shown on stderr. Auth errors use their user-facing wording.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { source, .. } => source.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ApiError> for CliError {
    #[track_caller]
    fn from(source: ApiError) -> Self {
        Self::Api {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for CliError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
